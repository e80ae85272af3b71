//! Application module for the writing app
//!
//! This module contains the application lifecycle:
//! - `App`: Entry point that loads configuration and runs the event loop
//! - `WritingApp`: The application context owning the watchdog, text surface,
//!   input bridge and window
//! - `handler`: winit `ApplicationHandler` implementation for `WritingApp`
//! - `frame`: per-frame egui layout

mod frame;
pub mod geometry;
mod handler;
pub mod window;
mod writing_app;

pub use writing_app::WritingApp;

use crate::activity_log::ActivityLog;
use crate::report::{DialogNotifier, ErrorReporter};
use anyhow::Result;
use disappearing_text_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::event_loop::{ControlFlow, EventLoop};

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Create a new application from a validated configuration
    pub fn new(runtime: Arc<Runtime>, config: Config) -> Self {
        crate::debug::apply_config_level(config.log_level);
        Self { config, runtime }
    }

    /// Build the error reporter for `config`'s activity log
    pub fn error_reporter(config: &Config) -> ErrorReporter<DialogNotifier> {
        ErrorReporter::new(
            ActivityLog::new(&config.activity_log_dir, &config.activity_log_name),
            DialogNotifier,
        )
    }

    /// Run the application until the window closes
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Use Wait for power-efficient event handling
        // Combined with WaitUntil in about_to_wait for the idle deadline
        event_loop.set_control_flow(ControlFlow::Wait);

        let reporter = Self::error_reporter(&self.config);
        let mut app = WritingApp::new(self.config, self.runtime, reporter);

        event_loop.run_app(&mut app)?;

        app.into_result()
    }
}
