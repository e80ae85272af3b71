//! Default values for idle timing, confirmation and activity-log settings.

use std::path::PathBuf;

pub fn idle_timeout_secs() -> f64 {
    5.0
}

/// Upper bound on how late a clear may fire after the deadline.
pub fn tick_interval_ms() -> u64 {
    100
}

pub fn confirm_on_close() -> bool {
    true
}

pub fn show_countdown() -> bool {
    true
}

pub fn activity_log_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn activity_log_name() -> String {
    "disapp_txt_wrtg_app".to_string()
}
