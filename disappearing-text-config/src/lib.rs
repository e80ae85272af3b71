//! Configuration system for the disappearing-text writing app.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the application. It includes:
//!
//! - The [`Config`] struct with the idle timeout, window geometry and font
//! - Default value functions used by serde
//! - YAML persistence under the XDG config directory
//! - [`ConfigError`] for callers that need to match on failure modes

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::{Config, MAX_IDLE_TIMEOUT_SECS};
pub use error::ConfigError;
pub use types::LogLevel;
