//! System font lookup for egui.
//!
//! Resolves the configured family through the system font database and puts
//! it first in egui's proportional family, so every label and the typing area
//! use it. When the family is not installed egui's built-in font is kept.

use fontdb::{Database, Family, Query};

/// Load the raw bytes and face index of `family_name` from the system fonts.
pub fn load_system_font(family_name: &str) -> Option<(Vec<u8>, u32)> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::Name(family_name)],
        weight: fontdb::Weight::NORMAL,
        style: fontdb::Style::Normal,
        ..Query::default()
    };
    let id = db.query(&query)?;

    // Keep the face index for TTC (TrueType Collection) files where several
    // faces share the same data.
    db.with_face_data(id, |data, face_index| (data.to_vec(), face_index))
}

/// Build font definitions with `font` preferred for proportional text.
pub fn font_definitions(family_name: &str, font: Vec<u8>, face_index: u32) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    let mut data = egui::FontData::from_owned(font);
    data.index = face_index;
    fonts.font_data.insert(family_name.to_owned(), data.into());
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, family_name.to_owned());
    fonts
}

/// Install the configured font family on `ctx`.
///
/// Returns `false` when the family could not be found and the default font
/// stays in place.
pub fn configure_fonts(ctx: &egui::Context, family_name: &str) -> bool {
    match load_system_font(family_name) {
        Some((font, face_index)) => {
            ctx.set_fonts(font_definitions(family_name, font, face_index));
            log::info!("Using system font '{}'", family_name);
            true
        }
        None => {
            log::warn!(
                "Font family '{}' not found, falling back to the built-in font",
                family_name
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_definitions_prefer_configured_family() {
        let fonts = font_definitions("Arial", vec![0u8; 4], 0);
        let proportional = &fonts.families[&egui::FontFamily::Proportional];
        assert_eq!(proportional.first().map(String::as_str), Some("Arial"));
        assert!(fonts.font_data.contains_key("Arial"));
    }

    #[test]
    fn test_unknown_family_is_not_found() {
        assert!(load_system_font("No Such Font Family 7f3a").is_none());
    }
}
