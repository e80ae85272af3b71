//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.

mod misc;
mod window;

// ── Idle timing & activity log ─────────────────────────────────────────────
pub use misc::{
    activity_log_dir, activity_log_name, confirm_on_close, idle_timeout_secs, show_countdown,
    tick_interval_ms,
};

// ── Window & visual appearance ─────────────────────────────────────────────
pub use window::{
    background_color, font_family, header_image, window_height, window_title, window_width,
};
