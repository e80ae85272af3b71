//! Typed error types for the writing app.
//!
//! `ConfigError` lives in the config crate and is re-exported here so that the
//! whole taxonomy can be matched on from one place.

use std::path::PathBuf;
use thiserror::Error;

pub use disappearing_text_config::ConfigError;

/// The text surface cannot be cleared or focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface has not been attached to a window yet.
    #[error("text surface is not ready (no window attached yet)")]
    NotReady,

    /// The window owning the surface has been torn down.
    #[error("text surface has been destroyed")]
    Destroyed,
}

/// The activity log file could not be written.
#[derive(Debug, Error)]
#[error("could not write activity log '{}'", path.display())]
pub struct LogWriteError {
    /// Log file that was being appended to.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}
