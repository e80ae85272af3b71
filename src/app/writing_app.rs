//! Application context.
//!
//! `WritingApp` owns every piece of runtime state: the config, the idle
//! watchdog, the text surface, the input bridge, the window and the error
//! reporter. The winit handler and the frame layout borrow from it; nothing
//! lives in globals.

use crate::app::geometry;
use crate::app::window::EguiWindow;
use crate::error::SurfaceError;
use crate::header_image::HeaderImage;
use crate::input_bridge::InputBridge;
use crate::quit_confirmation_ui::QuitConfirmationUI;
use crate::report::{DialogNotifier, ErrorReporter, Notifier};
use crate::surface::{SurfaceControl, TextSurface};
use crate::ui_constants::{TYPING_AREA_ROWS, TYPING_FONT_SIZE};
use crate::watchdog::Watchdog;
use anyhow::{Context, Result, anyhow};
use disappearing_text_config::Config;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Application context for the single writing window
pub struct WritingApp<N: Notifier = DialogNotifier> {
    pub(crate) config: Config,
    runtime: Arc<Runtime>,
    pub(crate) window: Option<EguiWindow>,
    pub(crate) surface: TextSurface,
    pub(crate) watchdog: Watchdog,
    pub(crate) bridge: InputBridge,
    pub(crate) reporter: ErrorReporter<N>,
    pub(crate) quit_ui: QuitConfirmationUI,
    pub(crate) header_image: Option<HeaderImage>,
    /// When egui asked to be repainted next
    pub(crate) next_repaint: Option<Instant>,
    /// Last redraw triggered by the countdown bar
    pub(crate) last_countdown_redraw: Option<Instant>,
    /// Set once the event loop should exit
    pub(crate) should_exit: bool,
    /// First fatal error, returned from `App::run`
    fatal_error: Option<anyhow::Error>,
}

impl<N: Notifier> WritingApp<N> {
    /// Create the context. Nothing is shown until the event loop resumes.
    pub fn new(config: Config, runtime: Arc<Runtime>, reporter: ErrorReporter<N>) -> Self {
        let font = egui::FontId::proportional(TYPING_FONT_SIZE);
        Self {
            watchdog: Watchdog::new(config.tick_interval()),
            config,
            runtime,
            window: None,
            surface: TextSurface::new(font, TYPING_AREA_ROWS),
            bridge: InputBridge::new(),
            reporter,
            quit_ui: QuitConfirmationUI::new(),
            header_image: None,
            next_repaint: None,
            last_countdown_redraw: None,
            should_exit: false,
            fatal_error: None,
        }
    }

    /// The idle watchdog
    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }

    /// The text surface
    pub fn surface(&self) -> &TextSurface {
        &self.surface
    }

    /// Consume the context, returning the fatal error that ended it, if any
    pub fn into_result(self) -> Result<()> {
        match self.fatal_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Create the window, wire the surface and arm the watchdog.
    pub(crate) fn start(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.should_exit {
            return;
        }
        if let Err(e) = self.open_window(event_loop) {
            self.fail(event_loop, "create_window", e);
            return;
        }
        if let Err(e) = self.arm(Instant::now()) {
            self.fail(event_loop, "startup", e);
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = winit::dpi::LogicalSize::new(
            self.config.window_width as f64,
            self.config.window_height as f64,
        );
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.window_title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_resizable(false)
            .with_enabled_buttons(winit::window::WindowButtons::CLOSE)
            .with_visible(false);

        let runtime = Arc::clone(&self.runtime);
        let window = runtime.block_on(EguiWindow::new(
            event_loop,
            window_attrs,
            self.config.background_color,
        ))?;

        geometry::center_on_monitor(window.window());
        window.window().set_visible(true);

        crate::fonts::configure_fonts(window.egui_ctx(), &self.config.font_family);
        self.header_image = self.load_header_image(window.egui_ctx())?;

        log::info!(
            "Window created ({}x{}, timeout {}s)",
            self.config.window_width,
            self.config.window_height,
            self.config.idle_timeout_secs
        );
        self.window = Some(window);
        Ok(())
    }

    /// Load the decorative image; a missing image is only fatal when required.
    fn load_header_image(&self, ctx: &egui::Context) -> Result<Option<HeaderImage>> {
        let Some(path) = &self.config.header_image else {
            return Ok(None);
        };
        match HeaderImage::load(ctx, path) {
            Ok(image) => Ok(Some(image)),
            Err(e) if self.config.require_header_image => Err(e),
            Err(e) => {
                log::warn!("Continuing without header image: {:#}", e);
                Ok(None)
            }
        }
    }

    /// Attach the surface, start the idle clock and do the initial clear.
    pub(crate) fn arm(&mut self, now: Instant) -> Result<()> {
        self.surface.attach()?;
        self.watchdog.start(self.config.idle_timeout(), now)?;
        self.surface
            .clear()
            .context("could not prepare the typing area")?;
        if let Err(e) = self.surface.focus() {
            log::warn!("Could not focus the typing area: {}", e);
        }
        self.request_redraw();
        Ok(())
    }

    /// Evaluate the idle timeout.
    ///
    /// The watchdog pauses while the exit confirmation is showing.
    pub(crate) fn tick(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        if self.quit_ui.is_visible() {
            return;
        }
        match self.watchdog.tick(now, &mut self.surface) {
            Ok(true) => {
                log::info!("Idle timeout reached, typing area cleared");
                self.request_redraw();
            }
            Ok(false) => {}
            Err(SurfaceError::NotReady) => {
                crate::debug_log!("WATCHDOG", "Surface not ready, retrying next tick");
            }
            Err(e @ SurfaceError::Destroyed) => {
                self.fail(event_loop, "clear_typing_area", anyhow!(e));
            }
        }
    }

    /// The user declined to exit: restart the idle clock and carry on.
    pub(crate) fn resume_after_declined_exit(&mut self) {
        log::info!("Exit declined, restarting idle clock");
        if let Err(e) = self.watchdog.note_activity() {
            log::warn!("Could not restart idle clock: {}", e);
        }
        self.request_redraw();
    }

    /// Orderly exit: stop ticking, tear the surface down, drop the window.
    pub(crate) fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        log::info!("Shutting down");
        self.watchdog.stop();
        self.surface.destroy();
        self.header_image = None;
        self.window = None;
        self.should_exit = true;
        event_loop.exit();
    }

    /// Report a fatal error to the user and the activity log, then exit.
    pub(crate) fn fail(&mut self, event_loop: &ActiveEventLoop, source: &str, error: anyhow::Error) {
        self.reporter.report(source, &*error);
        if self.fatal_error.is_none() {
            self.fatal_error = Some(error.context(format!("{source} failed")));
        }
        self.shutdown(event_loop);
    }

    pub(crate) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
