//! Shared integration test helpers.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` keeps files that use only some helpers quiet.

#![allow(dead_code)]

use disappearing_text::error::SurfaceError;
use disappearing_text::report::Notifier;
use disappearing_text::surface::SurfaceControl;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Surface fake that records calls and can be scripted to fail.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub content: String,
    pub clears: usize,
    pub focuses: usize,
    /// Results returned by upcoming `clear` calls; `Ok` once drained
    pub clear_results: VecDeque<Result<(), SurfaceError>>,
    /// Error returned by every `focus` call
    pub focus_error: Option<SurfaceError>,
}

impl FakeSurface {
    pub fn with_content(text: &str) -> Self {
        Self {
            content: text.to_string(),
            ..Default::default()
        }
    }

    /// Make the next `clear` fail with `error`
    pub fn fail_next_clear(&mut self, error: SurfaceError) {
        self.clear_results.push_back(Err(error));
    }
}

impl SurfaceControl for FakeSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.clear_results.pop_front().unwrap_or(Ok(()))?;
        self.content.clear();
        self.clears += 1;
        Ok(())
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        if let Some(e) = self.focus_error {
            return Err(e);
        }
        self.focuses += 1;
        Ok(())
    }
}

/// Notifier that keeps every message instead of showing a dialog.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

impl Notifier for &RecordingNotifier {
    fn show_error(&self, title: &str, message: &str) {
        (*self).show_error(title, message);
    }
}

/// `t0 + secs` for readable timelines
pub fn at(t0: Instant, secs: f64) -> Instant {
    t0 + Duration::from_secs_f64(secs)
}
