//! Debug logging infrastructure.
//!
//! `init_log_bridge` installs a `log::Log` implementation that routes every
//! `log::info!()` etc. to a debug file:
//!
//! - `/tmp/disappearing_text_debug.log` on Unix/macOS
//! - `%TEMP%\disappearing_text_debug.log` on Windows
//!
//! The level comes from `RUST_LOG` when set (records are then mirrored to
//! stderr as well), otherwise from the config `log_level`, applied once the
//! config has loaded. The file is opened lazily on the first record, so a
//! disabled log never touches the filesystem.
//!
//! The category macros (`debug_info!`, `debug_log!`, ...) log with the
//! category as the record target, for the high-frequency watchdog and input
//! tracing that is only interesting at debug level.

use disappearing_text_config::LogLevel;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Get the path to the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/disappearing_text_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("disappearing_text_debug.log")
    }
}

struct LogBridge {
    file: Mutex<Option<File>>,
    /// `RUST_LOG` was set: it owns the level and records go to stderr too
    env_controlled: bool,
}

impl LogBridge {
    fn open_file() -> Option<File> {
        // Silently fail if log file can't be opened; logging must never
        // interfere with the application itself.
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(log_path())
            .ok()?;
        let _ = writeln!(
            file,
            "\n{}\ndisappearing-text debug session started at {}\n{}",
            "=".repeat(80),
            get_timestamp(),
            "=".repeat(80)
        );
        Some(file)
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        if self.env_controlled {
            eprint!("{line}");
        }

        let mut file = self.file.lock();
        if file.is_none() {
            *file = Self::open_file();
        }
        if let Some(f) = file.as_mut() {
            let _ = f.write_all(line.as_bytes());
            let _ = f.flush();
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn env_level() -> Option<LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    // Only a bare level is understood; module directives fall back to info.
    Some(value.trim().parse().unwrap_or(LevelFilter::Info))
}

/// Install the log bridge as the global logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_log_bridge() {
    let level = env_level();
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: Mutex::new(None),
        env_controlled: level.is_some(),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level.unwrap_or(LevelFilter::Off));
    }
}

/// Apply the config log level unless `RUST_LOG` already decided it.
pub fn apply_config_level(level: LogLevel) {
    let env_controlled = BRIDGE.get().is_some_and(|b| b.env_controlled);
    if !env_controlled {
        log::set_max_level(level.to_level_filter());
    }
}

// Convenience macros for categorised logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!(target: $category, $($arg)*)
    };
}
