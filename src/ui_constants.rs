//! Named constants for UI layout dimensions and fixed texts.
//!
//! Only layout values (dimensions, sizes, spacing) and static copy belong
//! here. Colours the user can change live in the config.

// ---------------------------------------------------------------------------
// Main window  (src/app/frame.rs)
// ---------------------------------------------------------------------------

/// Horizontal padding between the window edge and its content.
pub const WINDOW_PADDING_X: f32 = 45.0;
/// Vertical spacing around the header image.
pub const HEADER_IMAGE_SPACING: f32 = 10.0;
/// Height of the idle countdown bar.
pub const COUNTDOWN_BAR_HEIGHT: f32 = 6.0;

/// Point size of the welcome heading.
pub const INTRO_FONT_SIZE: f32 = 16.0;
/// Point size of the explanatory paragraph.
pub const EXPLANATION_FONT_SIZE: f32 = 12.0;
/// Point size of the label directly above the typing area.
pub const PROMPT_FONT_SIZE: f32 = 16.0;

// ---------------------------------------------------------------------------
// Typing area  (src/surface.rs)
// ---------------------------------------------------------------------------

/// Point size of typed text.
pub const TYPING_FONT_SIZE: f32 = 14.0;
/// Visible lines in the typing area.
pub const TYPING_AREA_ROWS: usize = 15;

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

/// Welcome heading at the top of the window.
pub const INTRO_TEXT: &str = "WELCOME TO MY DISAPPEARING TEXT WRITING APPLICATION!";
/// Label directly above the typing area.
pub const PROMPT_TEXT: &str = "Please type your contents below.";
/// Question asked before the window closes.
pub const EXIT_PROMPT: &str = "Do you want to exit this application?";

/// Explanatory paragraph naming the configured idle timeout.
pub fn explanation_text(timeout_secs: f64) -> String {
    format!(
        "For most writers, a big problem is writing block. That refers to\n\
         where you can't think of what to write and you can't write anything.\n\n\
         The goal of this application is to help reduce writer's block.\n\n\
         If you stop typing, after {} seconds the contents of the typing area below will be cleared.",
        format_seconds(timeout_secs)
    )
}

/// `5` for whole seconds, `2.5` otherwise.
fn format_seconds(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as u64)
    } else {
        format!("{secs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_mentions_whole_seconds() {
        assert!(explanation_text(5.0).contains("after 5 seconds"));
    }

    #[test]
    fn test_explanation_mentions_fractional_seconds() {
        assert!(explanation_text(2.5).contains("after 2.5 seconds"));
    }
}
