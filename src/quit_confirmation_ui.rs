//! Quit confirmation dialog for the application.
//!
//! Shown when the user attempts to close the window. "Yes" exits; "No" keeps
//! the window open and the caller restarts the idle clock.

/// Action returned by the quit confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitConfirmAction {
    /// User confirmed - quit the application
    Quit,
    /// User declined - keep the window open
    Cancel,
    /// No action yet (dialog not showing or still showing)
    None,
}

/// State for the quit confirmation dialog
#[derive(Debug, Default)]
pub struct QuitConfirmationUI {
    /// Whether the dialog is visible
    visible: bool,
}

impl QuitConfirmationUI {
    /// Create a new quit confirmation UI
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the dialog is currently visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the confirmation dialog
    pub fn show_confirmation(&mut self) {
        self.visible = true;
    }

    /// Render the dialog and return any action
    pub fn show(&mut self, ctx: &egui::Context) -> QuitConfirmAction {
        if !self.visible {
            return QuitConfirmAction::None;
        }

        let mut action = QuitConfirmAction::None;

        egui::Window::new("Exit?")
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(crate::ui_constants::EXIT_PROMPT)
                            .size(16.0)
                            .strong(),
                    );
                    ui.add_space(15.0);

                    ui.horizontal(|ui| {
                        let yes_button = egui::Button::new(
                            egui::RichText::new("Yes").color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(180, 50, 50));

                        if ui.add(yes_button).clicked() {
                            action = QuitConfirmAction::Quit;
                        }

                        ui.add_space(10.0);

                        if ui.button("No").clicked() {
                            action = QuitConfirmAction::Cancel;
                        }
                    });
                    ui.add_space(10.0);
                });
            });

        // Escape declines, Enter confirms
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = QuitConfirmAction::Cancel;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = QuitConfirmAction::Quit;
        }

        if action != QuitConfirmAction::None {
            self.visible = false;
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ui: &mut QuitConfirmationUI, events: Vec<egui::Event>) -> QuitConfirmAction {
        let ctx = egui::Context::default();
        let mut action = QuitConfirmAction::None;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            action = ui.show(ctx);
        });
        action
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_hidden_dialog_returns_none() {
        let mut ui = QuitConfirmationUI::new();
        assert_eq!(run_frame(&mut ui, vec![]), QuitConfirmAction::None);
    }

    #[test]
    fn test_escape_declines_and_hides() {
        let mut ui = QuitConfirmationUI::new();
        ui.show_confirmation();
        assert_eq!(
            run_frame(&mut ui, vec![key(egui::Key::Escape)]),
            QuitConfirmAction::Cancel
        );
        assert!(!ui.is_visible());
    }

    #[test]
    fn test_enter_confirms() {
        let mut ui = QuitConfirmationUI::new();
        ui.show_confirmation();
        assert_eq!(
            run_frame(&mut ui, vec![key(egui::Key::Enter)]),
            QuitConfirmAction::Quit
        );
    }

    #[test]
    fn test_stays_visible_without_input() {
        let mut ui = QuitConfirmationUI::new();
        ui.show_confirmation();
        assert_eq!(run_frame(&mut ui, vec![]), QuitConfirmAction::None);
        assert!(ui.is_visible());
    }
}
