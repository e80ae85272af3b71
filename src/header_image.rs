//! Decorative header image.
//!
//! Decoded once at startup with the `image` crate and uploaded as an egui
//! texture. The image carries no function, so a missing file is only fatal
//! when the config asks for it (`require_header_image`).

use anyhow::{Context, Result};
use std::path::Path;

/// Decode `path` into an egui image.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to load header image {}", path.display()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// A header image uploaded to the egui context.
pub struct HeaderImage {
    texture: egui::TextureHandle,
}

impl HeaderImage {
    /// Load and upload the image at `path`
    pub fn load(ctx: &egui::Context, path: &Path) -> Result<Self> {
        let color_image = load_color_image(path)?;
        let texture = ctx.load_texture("header_image", color_image, egui::TextureOptions::LINEAR);
        Ok(Self { texture })
    }

    /// Image size in points
    pub fn size(&self) -> egui::Vec2 {
        self.texture.size_vec2()
    }

    /// Draw the image centered in the available width
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add(egui::Image::new((self.texture.id(), self.size())));
        });
    }
}
