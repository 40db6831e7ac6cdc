// src/app/utils.rs
// Utility functions and constants for ideabench: the previewable-image allow-list, size formatting, and image-to-texture loading.

use egui::{ColorImage, Context, ImageData, TextureHandle, TextureOptions};
use image;
use log::{error, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- Constants ---
pub const LOGO_BYTES: &[u8] = include_bytes!("../../assets/ideabench.png");

/// Image MIME types the UI renders as thumbnails. Any other type is still
/// a valid file selection, it just gets no preview.
pub const PREVIEWABLE_IMAGE_TYPES: [&str; 3] = ["image/gif", "image/jpeg", "image/png"];

// --- Utility Functions ---

/// Opens the native file dialog filtered to common image extensions.
/// Returns None when the user cancels the dialog.
pub fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif"])
        .pick_file()
}

/// Decides whether a selected file is a displayable image type, by MIME
/// type guessed from its extension.
pub fn is_previewable_image(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first_raw()
        .map_or(false, |mime| PREVIEWABLE_IMAGE_TYPES.contains(&mime))
}

pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    if bytes >= GIB {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.2} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.2} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn load_image_from_bytes(ctx: &Context, name: &str, bytes: &[u8]) -> Option<TextureHandle> {
    match image::load_from_memory(bytes) {
        Ok(image) => {
            // Get image dimensions
            let size = [image.width() as _, image.height() as _];
            let image_buffer = image.to_rgba8();
            let pixels_u8 = image_buffer.into_raw();

            let pixels_color32: Vec<egui::Color32> = pixels_u8
                .chunks_exact(4)
                .map(|rgba| egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]))
                .collect();

            let color_image = ColorImage {
                size,
                pixels: pixels_color32,
            };

            let image_data = ImageData::Color(Arc::new(color_image));
            let texture_options = TextureOptions::LINEAR;

            Some(ctx.load_texture(name, image_data, texture_options))
        }
        Err(err) => {
            error!(
                "Failed to decode image '{}' from bytes using image crate: {:?}",
                name, err
            );
            None
        }
    }
}

/// Reads an image file and loads it as a texture. Returns None for
/// non-previewable types, unreadable files, and decode failures.
pub fn load_image_from_path(ctx: &Context, path: &Path) -> Option<TextureHandle> {
    if !is_previewable_image(path) {
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => load_image_from_bytes(ctx, &path.display().to_string(), &bytes),
        Err(err) => {
            warn!("Failed to read image file '{}': {}", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previewable_allow_list_matches_the_three_types() {
        assert!(is_previewable_image(Path::new("photo.png")));
        assert!(is_previewable_image(Path::new("photo.jpg")));
        assert!(is_previewable_image(Path::new("photo.jpeg")));
        assert!(is_previewable_image(Path::new("photo.gif")));
    }

    #[test]
    fn other_types_are_not_previewable() {
        assert!(!is_previewable_image(Path::new("photo.webp")));
        assert!(!is_previewable_image(Path::new("photo.tiff")));
        assert!(!is_previewable_image(Path::new("notes.txt")));
        assert!(!is_previewable_image(Path::new("no_extension")));
    }

    #[test]
    fn format_size_picks_the_right_unit() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MiB");
    }
}
