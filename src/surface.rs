//! Text surface controller.
//!
//! Owns the buffer behind the single egui text area and the
//! `Uninitialized → Ready → Destroyed` lifecycle. The watchdog only sees the
//! [`SurfaceControl`] capability; rendering goes through [`TextSurface::show`].

use crate::error::SurfaceError;

/// Capability handed to the watchdog: clear and refocus, nothing else.
pub trait SurfaceControl {
    /// Remove all content.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Move keyboard focus to the surface. Best effort.
    fn focus(&mut self) -> Result<(), SurfaceError>;
}

/// Lifecycle of the text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Created but not yet attached to a window
    Uninitialized,
    /// Attached and usable
    Ready,
    /// Window torn down; every operation fails
    Destroyed,
}

/// What happened to the surface during one egui frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceFrame {
    /// The text area holds keyboard focus
    pub has_focus: bool,
    /// The text changed this frame
    pub changed: bool,
}

/// The typing area.
pub struct TextSurface {
    state: SurfaceState,
    content: String,
    id: egui::Id,
    font: egui::FontId,
    rows: usize,
    focus_requested: bool,
}

impl TextSurface {
    /// Create an unattached surface rendered with `font` and `rows` visible lines
    pub fn new(font: egui::FontId, rows: usize) -> Self {
        Self {
            state: SurfaceState::Uninitialized,
            content: String::new(),
            id: egui::Id::new("typing_area"),
            font,
            rows,
            focus_requested: false,
        }
    }

    /// Mark the surface usable once its window exists.
    pub fn attach(&mut self) -> Result<(), SurfaceError> {
        match self.state {
            SurfaceState::Uninitialized => {
                self.state = SurfaceState::Ready;
                Ok(())
            }
            SurfaceState::Ready => Ok(()),
            SurfaceState::Destroyed => Err(SurfaceError::Destroyed),
        }
    }

    /// Tear the surface down. Irreversible.
    pub fn destroy(&mut self) {
        self.state = SurfaceState::Destroyed;
        self.focus_requested = false;
    }

    /// Current lifecycle state
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Read-only view of the typed text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether a focus request is waiting for the next frame
    pub fn focus_pending(&self) -> bool {
        self.focus_requested
    }

    fn check_ready(&self) -> Result<(), SurfaceError> {
        match self.state {
            SurfaceState::Ready => Ok(()),
            SurfaceState::Uninitialized => Err(SurfaceError::NotReady),
            SurfaceState::Destroyed => Err(SurfaceError::Destroyed),
        }
    }

    /// Render the text area and report focus and edits.
    ///
    /// Nothing is drawn unless the surface is `Ready`.
    pub fn show(&mut self, ui: &mut egui::Ui) -> SurfaceFrame {
        if self.state != SurfaceState::Ready {
            return SurfaceFrame::default();
        }

        if self.focus_requested {
            ui.memory_mut(|mem| mem.request_focus(self.id));
            self.focus_requested = false;
        }

        let output = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::TextEdit::multiline(&mut self.content)
                    .id(self.id)
                    .font(self.font.clone())
                    .desired_width(f32::INFINITY)
                    .desired_rows(self.rows)
                    .lock_focus(true)
                    .show(ui)
            })
            .inner;

        SurfaceFrame {
            has_focus: output.response.has_focus(),
            changed: output.response.changed(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
    }
}

impl SurfaceControl for TextSurface {
    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.check_ready()?;
        self.content.clear();
        Ok(())
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.check_ready()?;
        self.focus_requested = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TextSurface {
        TextSurface::new(egui::FontId::proportional(14.0), 15)
    }

    #[test]
    fn test_new_surface_is_uninitialized() {
        let mut s = surface();
        assert_eq!(s.state(), SurfaceState::Uninitialized);
        assert_eq!(s.clear(), Err(SurfaceError::NotReady));
        assert_eq!(s.focus(), Err(SurfaceError::NotReady));
    }

    #[test]
    fn test_clear_removes_content_when_ready() {
        let mut s = surface();
        s.attach().unwrap();
        s.set_content("half a sentence");
        s.clear().unwrap();
        assert_eq!(s.content(), "");
    }

    #[test]
    fn test_focus_is_deferred_to_next_frame() {
        let mut s = surface();
        s.attach().unwrap();
        assert!(!s.focus_pending());
        s.focus().unwrap();
        assert!(s.focus_pending());
    }

    #[test]
    fn test_destroyed_surface_rejects_operations() {
        let mut s = surface();
        s.attach().unwrap();
        s.set_content("kept");
        s.destroy();
        assert_eq!(s.clear(), Err(SurfaceError::Destroyed));
        assert_eq!(s.focus(), Err(SurfaceError::Destroyed));
        assert_eq!(s.attach(), Err(SurfaceError::Destroyed));
        assert_eq!(s.content(), "kept");
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut s = surface();
        s.attach().unwrap();
        s.attach().unwrap();
        assert_eq!(s.state(), SurfaceState::Ready);
    }

    #[test]
    fn test_show_consumes_focus_request() {
        let ctx = egui::Context::default();
        let mut s = surface();
        s.attach().unwrap();
        s.focus().unwrap();

        let mut frame = SurfaceFrame::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                frame = s.show(ui);
            });
        });

        assert!(!s.focus_pending());
        assert!(!frame.changed);
    }
}
