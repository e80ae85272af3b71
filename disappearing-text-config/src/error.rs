//! Typed error variants for the disappearing-text-config crate.
//!
//! Startup treats every variant as fatal: the application reports the error
//! and exits rather than running with a half-valid configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use disappearing_text_config::ConfigError;
//!
//! fn describe(err: &ConfigError) -> &'static str {
//!     match err {
//!         ConfigError::Io(_) => "config file could not be read or written",
//!         ConfigError::Parse(_) => "config file is not valid YAML",
//!         ConfigError::Validation(_) => "a config value is out of range",
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
