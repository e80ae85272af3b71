//! Append-only activity log.
//!
//! One file per calendar day, `log_<app>_<YYYY-MM-DD>.txt`, in the configured
//! directory. Each entry is a single line
//! `<YYYY-MM-DD @ HH:MM AM>: <source>: <detail>`. Files are created on the
//! first write of the day and only ever appended to.

use crate::error::LogWriteError;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used at the start of each entry
const ENTRY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d @ %I:%M %p";

/// Dated diagnostic log for errors surfaced to the user.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    dir: PathBuf,
    app_name: String,
}

impl ActivityLog {
    pub fn new(dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.into(),
        }
    }

    /// Directory that holds the log files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the log file for `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!(
            "log_{}_{}.txt",
            self.app_name,
            date.format("%Y-%m-%d")
        ))
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&self, source: &str, detail: &str) -> Result<PathBuf, LogWriteError> {
        self.record_at(Local::now(), source, detail)
    }

    /// Append an entry stamped with `at`, returning the file written.
    ///
    /// Multi-line details are flattened so that one entry stays one line.
    pub fn record_at<Tz: TimeZone>(
        &self,
        at: DateTime<Tz>,
        source: &str,
        detail: &str,
    ) -> Result<PathBuf, LogWriteError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = self.path_for(at.date_naive());
        let detail = detail.trim().replace("\r\n", "\n").replace('\n', " | ");
        let line = format!(
            "{}: {}: {}\n",
            at.format(ENTRY_TIMESTAMP_FORMAT),
            source,
            detail
        );

        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            file.write_all(line.as_bytes())?;
            file.flush()
        };

        match write() {
            Ok(()) => Ok(path),
            Err(source) => Err(LogWriteError { path, source }),
        }
    }
}
