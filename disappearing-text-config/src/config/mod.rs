//! Core `Config` struct definition.
//!
//! # Sub-modules
//!
//! - [`persistence`] - `load` / `save` and XDG path helpers

mod persistence;

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Longest accepted idle timeout (one day).
///
/// Keeps every timeout representable as a `Duration` and addable to an
/// `Instant` on all platforms.
pub const MAX_IDLE_TIMEOUT_SECS: f64 = 86_400.0;

/// Application configuration.
///
/// Every field carries a serde default so that partial YAML files stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Idle Watchdog
    // ========================================================================
    /// Seconds without input after which the text area is cleared
    #[serde(default = "crate::defaults::idle_timeout_secs")]
    pub idle_timeout_secs: f64,

    /// Maximum time between watchdog evaluations in milliseconds.
    /// A clear fires no later than `idle_timeout_secs` plus this interval.
    #[serde(default = "crate::defaults::tick_interval_ms")]
    pub tick_interval_ms: u64,

    // ========================================================================
    // Window & Display
    // ========================================================================
    /// Window width in logical pixels
    #[serde(default = "crate::defaults::window_width")]
    pub window_width: u32,

    /// Window height in logical pixels
    #[serde(default = "crate::defaults::window_height")]
    pub window_height: u32,

    /// Window title
    #[serde(default = "crate::defaults::window_title")]
    pub window_title: String,

    /// Font family for labels and the typing area (resolved via system fonts)
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Window background color [R, G, B]
    #[serde(default = "crate::defaults::background_color")]
    pub background_color: [u8; 3],

    /// Decorative image shown above the typing area (relative to the working directory)
    #[serde(default = "crate::defaults::header_image")]
    pub header_image: Option<PathBuf>,

    /// Treat a missing or undecodable header image as a fatal startup error
    #[serde(default)]
    pub require_header_image: bool,

    /// Show a bar counting down to the next clear
    #[serde(default = "crate::defaults::show_countdown")]
    pub show_countdown: bool,

    // ========================================================================
    // Lifecycle
    // ========================================================================
    /// Ask before closing the window
    #[serde(default = "crate::defaults::confirm_on_close")]
    pub confirm_on_close: bool,

    // ========================================================================
    // Logging
    // ========================================================================
    /// Directory that receives the dated activity log files
    #[serde(default = "crate::defaults::activity_log_dir")]
    pub activity_log_dir: PathBuf,

    /// Application tag used in activity log file names (`log_<name>_<date>.txt`)
    #[serde(default = "crate::defaults::activity_log_name")]
    pub activity_log_name: String,

    /// Verbosity of the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            idle_timeout_secs: crate::defaults::idle_timeout_secs(),
            tick_interval_ms: crate::defaults::tick_interval_ms(),
            window_width: crate::defaults::window_width(),
            window_height: crate::defaults::window_height(),
            window_title: crate::defaults::window_title(),
            font_family: crate::defaults::font_family(),
            background_color: crate::defaults::background_color(),
            header_image: crate::defaults::header_image(),
            require_header_image: false,
            show_countdown: crate::defaults::show_countdown(),
            confirm_on_close: crate::defaults::confirm_on_close(),
            activity_log_dir: crate::defaults::activity_log_dir(),
            activity_log_name: crate::defaults::activity_log_name(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idle timeout in seconds
    pub fn with_idle_timeout_secs(mut self, secs: f64) -> Self {
        self.idle_timeout_secs = secs;
        self
    }

    /// Set the tick interval in milliseconds
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set window dimensions
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the header image path (`None` disables the image)
    pub fn with_header_image(mut self, path: Option<PathBuf>) -> Self {
        self.header_image = path;
        self
    }

    /// Set the activity log directory
    pub fn with_activity_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.activity_log_dir = dir.into();
        self
    }

    /// Idle timeout as a `Duration`.
    ///
    /// Only meaningful after [`Config::validate`] has accepted the value;
    /// out-of-range values are clamped and NaN maps to zero.
    pub fn idle_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.idle_timeout_secs.clamp(0.0, MAX_IDLE_TIMEOUT_SECS))
            .unwrap_or_default()
    }

    /// Tick interval as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that timing and geometry values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.idle_timeout_secs.is_finite() || self.idle_timeout_secs <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "idle_timeout_secs must be a positive number of seconds, got {}",
                self.idle_timeout_secs
            )));
        }
        if self.idle_timeout_secs > MAX_IDLE_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "idle_timeout_secs must not exceed {} seconds, got {}",
                MAX_IDLE_TIMEOUT_SECS, self.idle_timeout_secs
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval() > self.idle_timeout() {
            return Err(ConfigError::Validation(format!(
                "tick_interval_ms ({}) must not exceed the idle timeout ({}s)",
                self.tick_interval_ms, self.idle_timeout_secs
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.activity_log_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "activity_log_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config::new().with_idle_timeout_secs(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_nan_timeout_rejected() {
        let config = Config::new().with_idle_timeout_secs(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_interval_longer_than_timeout_rejected() {
        let config = Config::new()
            .with_idle_timeout_secs(0.05)
            .with_tick_interval_ms(100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let config = Config::new().with_window_size(0, 725);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_timeout_rejected() {
        let config = Config::new().with_idle_timeout_secs(1.0e19);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
        // Conversion stays total even for values validation refuses
        assert_eq!(
            config.idle_timeout(),
            Duration::from_secs_f64(MAX_IDLE_TIMEOUT_SECS)
        );
        assert_eq!(
            Config::new().with_idle_timeout_secs(f64::NAN).idle_timeout(),
            Duration::ZERO
        );
    }

    #[test]
    fn test_one_day_timeout_accepted() {
        let config = Config::new().with_idle_timeout_secs(MAX_IDLE_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fractional_timeout_duration() {
        let config = Config::new().with_idle_timeout_secs(2.5);
        assert_eq!(config.idle_timeout(), Duration::from_millis(2500));
    }
}
