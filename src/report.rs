//! Error reporting: tell the user, then try to write it down.
//!
//! Every error that reaches the orchestrator goes through [`ErrorReporter`]:
//! a message dialog first, then an entry in the activity log. When the log
//! itself cannot be written a second dialog says so and execution continues.

use crate::activity_log::ActivityLog;
use std::error::Error;
use std::path::PathBuf;

/// Something that can put an error message in front of the user.
pub trait Notifier {
    fn show_error(&self, title: &str, message: &str);
}

/// Native message box via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn show_error(&self, title: &str, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Render an error and its source chain on one line.
pub fn describe(error: &dyn Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Routes errors to a dialog and the activity log.
pub struct ErrorReporter<N: Notifier = DialogNotifier> {
    log: ActivityLog,
    notifier: N,
}

impl<N: Notifier> ErrorReporter<N> {
    pub fn new(log: ActivityLog, notifier: N) -> Self {
        Self { log, notifier }
    }

    /// The activity log entries are written to
    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Report `error` raised by the operation named `source`.
    ///
    /// Returns the log file written, or `None` when logging failed (which has
    /// already been shown to the user).
    pub fn report(&self, source: &str, error: &dyn Error) -> Option<PathBuf> {
        self.report_message(source, &describe(error))
    }

    /// Report a preformatted error detail.
    pub fn report_message(&self, source: &str, detail: &str) -> Option<PathBuf> {
        log::error!("{}: {}", source, detail);
        self.notifier
            .show_error("Error", &format!("Error ({source}): {detail}"));

        match self.log.record(source, detail) {
            Ok(path) => Some(path),
            Err(e) => {
                log::error!("Activity log write failed: {}", e);
                self.notifier.show_error(
                    "Error",
                    &format!("Error: System log could not be updated.\n{}", describe(&e)),
                );
                None
            }
        }
    }
}
