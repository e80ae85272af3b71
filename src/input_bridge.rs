//! Input event bridge.
//!
//! Turns keystrokes and edits inside the text surface into watchdog activity.
//! Events are only observed, never consumed: egui still inserts the character.
//! Nothing here returns an error; a rejected timestamp is logged and typing
//! carries on.

use crate::surface::SurfaceFrame;
use crate::watchdog::Watchdog;
use std::time::Instant;

/// Input activity that restarts the idle clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A key went down (including modifiers and navigation keys)
    KeyPressed,
    /// Text was typed or committed by an IME
    TextInput,
    /// Clipboard text was pasted
    Paste,
    /// A selection was cut
    Cut,
    /// The widget reported a content change
    ContentChanged,
}

/// Map a raw egui event to a surface event, if it counts as activity.
pub fn classify(event: &egui::Event) -> Option<SurfaceEvent> {
    match event {
        egui::Event::Key { pressed: true, .. } => Some(SurfaceEvent::KeyPressed),
        egui::Event::Text(_) | egui::Event::Ime(egui::ImeEvent::Commit(_)) => {
            Some(SurfaceEvent::TextInput)
        }
        egui::Event::Paste(_) => Some(SurfaceEvent::Paste),
        egui::Event::Cut => Some(SurfaceEvent::Cut),
        _ => None,
    }
}

/// Forwards surface activity to the watchdog.
#[derive(Debug, Default)]
pub struct InputBridge {
    forwarded: u64,
    rejected: u64,
}

impl InputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event as activity at `now`.
    pub fn forward(&mut self, event: SurfaceEvent, watchdog: &mut Watchdog, now: Instant) {
        match watchdog.note_activity_at(now) {
            Ok(()) => {
                self.forwarded += 1;
                crate::debug_trace!("INPUT", "{:?} restarted idle clock", event);
            }
            Err(e) => {
                self.rejected += 1;
                crate::debug_log!("INPUT", "{:?} not recorded: {}", event, e);
            }
        }
    }

    /// Forward everything relevant from one frame.
    ///
    /// Raw events only count while the surface holds focus, mirroring a key
    /// binding on the widget itself. Returns the number of events forwarded.
    pub fn forward_frame(
        &mut self,
        events: &[egui::Event],
        frame: SurfaceFrame,
        watchdog: &mut Watchdog,
        now: Instant,
    ) -> usize {
        let mut count = 0;
        if frame.has_focus {
            for event in events.iter().filter_map(classify) {
                self.forward(event, watchdog, now);
                count += 1;
            }
        }
        if frame.changed {
            self.forward(SurfaceEvent::ContentChanged, watchdog, now);
            count += 1;
        }
        count
    }

    /// Events that restarted the idle clock
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    /// Events the watchdog refused (stopped, or out-of-order timestamp)
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}
