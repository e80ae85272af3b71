// Library exports for the binary and the integration tests
//
// All runtime state lives in `app::WritingApp`; there are no globals apart
// from the log bridge in `debug`.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod activity_log;
pub mod app;
pub mod error;
pub mod fonts;
pub mod header_image;
pub mod input_bridge;
pub mod quit_confirmation_ui;
pub mod report;
pub mod surface;
pub mod ui_constants;
pub mod watchdog;

pub use disappearing_text_config::Config;
