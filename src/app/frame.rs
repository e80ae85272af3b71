//! Per-frame egui layout of the writing window.
//!
//! Top to bottom: welcome heading, explanation, header image, prompt label,
//! idle countdown and the typing area. The exit confirmation floats above
//! everything and disables the panel underneath while it is showing.

use crate::header_image::HeaderImage;
use crate::quit_confirmation_ui::{QuitConfirmAction, QuitConfirmationUI};
use crate::surface::{SurfaceFrame, TextSurface};
use crate::ui_constants::{
    COUNTDOWN_BAR_HEIGHT, EXPLANATION_FONT_SIZE, HEADER_IMAGE_SPACING, INTRO_FONT_SIZE,
    INTRO_TEXT, PROMPT_FONT_SIZE, PROMPT_TEXT, WINDOW_PADDING_X, explanation_text,
};
use std::time::Duration;

/// Navy, for the label above the typing area
const PROMPT_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 128);

/// Everything the layout reads or mutates for one frame
pub(crate) struct FrameView<'a> {
    pub surface: &'a mut TextSurface,
    pub quit_ui: &'a mut QuitConfirmationUI,
    pub header_image: Option<&'a HeaderImage>,
    pub timeout: Duration,
    /// Time left before the next clear, `None` hides the countdown
    pub remaining: Option<Duration>,
}

/// What the frame produced
#[derive(Debug, Default)]
pub(crate) struct FrameOutcome {
    /// Raw input events egui saw this frame
    pub events: Vec<egui::Event>,
    pub surface: SurfaceFrame,
    pub quit_action: Option<QuitConfirmAction>,
    /// The exit confirmation was up while the frame was laid out
    pub dialog_visible: bool,
}

/// Fraction of the idle timeout still left, in `0.0..=1.0`.
pub(crate) fn countdown_fraction(remaining: Duration, timeout: Duration) -> f32 {
    if timeout.is_zero() {
        return 0.0;
    }
    (remaining.as_secs_f32() / timeout.as_secs_f32()).clamp(0.0, 1.0)
}

/// Lay out the whole window.
pub(crate) fn draw(ctx: &egui::Context, view: FrameView<'_>) -> FrameOutcome {
    let FrameView {
        surface,
        quit_ui,
        header_image,
        timeout,
        remaining,
    } = view;

    let mut outcome = FrameOutcome {
        events: ctx.input(|i| i.events.clone()),
        dialog_visible: quit_ui.is_visible(),
        ..Default::default()
    };

    let panel_frame = egui::Frame::central_panel(&ctx.style())
        .fill(egui::Color32::TRANSPARENT)
        .inner_margin(egui::Margin::symmetric(WINDOW_PADDING_X as i8, 12));

    egui::CentralPanel::default()
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!outcome.dialog_visible, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(INTRO_TEXT)
                            .size(INTRO_FONT_SIZE)
                            .strong()
                            .color(egui::Color32::BLACK),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(explanation_text(timeout.as_secs_f64()))
                            .size(EXPLANATION_FONT_SIZE)
                            .strong()
                            .color(egui::Color32::BLACK),
                    );
                });

                if let Some(image) = header_image {
                    ui.add_space(HEADER_IMAGE_SPACING);
                    image.show(ui);
                    ui.add_space(HEADER_IMAGE_SPACING);
                } else {
                    ui.add_space(HEADER_IMAGE_SPACING * 2.0);
                }

                ui.label(
                    egui::RichText::new(PROMPT_TEXT)
                        .size(PROMPT_FONT_SIZE)
                        .strong()
                        .color(PROMPT_COLOR),
                );

                if let Some(remaining) = remaining {
                    let fraction = countdown_fraction(remaining, timeout);
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_height(COUNTDOWN_BAR_HEIGHT)
                            .fill(countdown_color(fraction)),
                    );
                }

                ui.add_space(4.0);
                outcome.surface = surface.show(ui);
            });
        });

    let action = quit_ui.show(ctx);
    if action != QuitConfirmAction::None {
        outcome.quit_action = Some(action);
    }

    outcome
}

/// Green while there is time, red as the clear approaches.
fn countdown_color(fraction: f32) -> egui::Color32 {
    if fraction > 0.5 {
        egui::Color32::from_rgb(60, 160, 80)
    } else if fraction > 0.2 {
        egui::Color32::from_rgb(220, 160, 40)
    } else {
        egui::Color32::from_rgb(200, 60, 50)
    }
}
