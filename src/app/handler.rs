//! `ApplicationHandler` impl for `WritingApp`.
//!
//! `resumed` creates the window, `window_event` draws frames and routes
//! input to the watchdog, and `about_to_wait` runs the idle tick and picks
//! the next wake-up with `ControlFlow::WaitUntil`.

use crate::app::frame::{self, FrameView};
use crate::app::writing_app::WritingApp;
use crate::quit_confirmation_ui::QuitConfirmAction;
use crate::report::Notifier;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

/// Minimum spacing between redraws driven only by the countdown bar
const COUNTDOWN_REDRAW_INTERVAL: Duration = Duration::from_millis(250);

impl<N: Notifier> ApplicationHandler for WritingApp<N> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.start(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &mut self.window else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(&event) {
            window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                if self.config.confirm_on_close {
                    log::info!("Close requested, asking for confirmation");
                    self.quit_ui.show_confirmation();
                    self.request_redraw();
                } else {
                    self.shutdown(event_loop);
                }
            }
            WindowEvent::Destroyed => {
                log::info!("Window destroyed");
                self.surface.destroy();
                self.shutdown(event_loop);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            return;
        }

        let now = Instant::now();
        self.tick(event_loop, now);
        if self.should_exit {
            return;
        }

        // Keep the countdown bar moving without redrawing every tick
        if self.config.show_countdown
            && self.watchdog.is_running()
            && self
                .last_countdown_redraw
                .is_none_or(|last| now.duration_since(last) >= COUNTDOWN_REDRAW_INTERVAL)
        {
            self.last_countdown_redraw = Some(now);
            self.request_redraw();
        }

        if let Some(at) = self.next_repaint
            && at <= now
        {
            self.next_repaint = None;
            self.request_redraw();
        }

        let wake = [
            self.watchdog.next_wake(now),
            self.next_repaint,
            self.config
                .show_countdown
                .then(|| self.last_countdown_redraw.map(|t| t + COUNTDOWN_REDRAW_INTERVAL))
                .flatten(),
        ]
        .into_iter()
        .flatten()
        .min();

        match wake {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

impl<N: Notifier> WritingApp<N> {
    /// Draw one frame and forward its input to the watchdog.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let remaining = if self.config.show_countdown {
            self.watchdog.remaining(now)
        } else {
            None
        };
        let timeout = self.config.idle_timeout();

        let Some(window) = &mut self.window else {
            return;
        };

        let surface = &mut self.surface;
        let quit_ui = &mut self.quit_ui;
        let header_image = self.header_image.as_ref();
        let mut outcome = None;
        let repaint_delay = window.render(|ctx| {
            outcome = Some(frame::draw(
                ctx,
                FrameView {
                    surface: &mut *surface,
                    quit_ui: &mut *quit_ui,
                    header_image,
                    timeout,
                    remaining,
                },
            ));
        });

        match repaint_delay {
            Some(delay) if delay.is_zero() => window.request_redraw(),
            Some(delay) => self.next_repaint = Some(now + delay),
            None => {}
        }

        let Some(outcome) = outcome else {
            return;
        };

        if !outcome.dialog_visible {
            let forwarded =
                self.bridge
                    .forward_frame(&outcome.events, outcome.surface, &mut self.watchdog, now);
            if forwarded > 0 {
                crate::debug_trace!("INPUT", "{} activity events this frame", forwarded);
            }
        }

        match outcome.quit_action {
            Some(QuitConfirmAction::Quit) => self.shutdown(event_loop),
            Some(QuitConfirmAction::Cancel) => self.resume_after_declined_exit(),
            Some(QuitConfirmAction::None) | None => {}
        }
    }
}
