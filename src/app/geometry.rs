//! Window placement helpers.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window;

/// Top-left position that centers `window` on a monitor.
///
/// A window larger than the monitor is pinned to the monitor's origin rather
/// than pushed off-screen.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor.saturating_sub(window) / 2) as i32;
    PhysicalPosition::new(
        monitor_position.x + offset(monitor_size.width, window_size.width),
        monitor_position.y + offset(monitor_size.height, window_size.height),
    )
}

/// Center `window` on the monitor it currently occupies.
///
/// Returns `false` when the platform cannot report a monitor (e.g. Wayland),
/// in which case the window manager's placement is kept.
pub fn center_on_monitor(window: &Window) -> bool {
    let Some(monitor) = window.current_monitor().or_else(|| window.primary_monitor()) else {
        log::warn!("No monitor information available, leaving window placement to the WM");
        return false;
    };
    let position = centered_position(monitor.position(), monitor.size(), window.outer_size());
    window.set_outer_position(position);
    log::info!(
        "Centered window at ({}, {}) on {:?}",
        position.x,
        position.y,
        monitor.name()
    );
    true
}
