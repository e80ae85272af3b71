//! Default values for window and visual-appearance settings.

use std::path::PathBuf;

pub fn window_width() -> u32 {
    800
}

pub fn window_height() -> u32 {
    725
}

pub fn window_title() -> String {
    "My Disappearing Text Writing App.".to_string()
}

pub fn font_family() -> String {
    "Arial".to_string()
}

pub fn background_color() -> [u8; 3] {
    [135, 206, 235] // Sky blue
}

pub fn header_image() -> Option<PathBuf> {
    Some(PathBuf::from("keyboard.png"))
}
