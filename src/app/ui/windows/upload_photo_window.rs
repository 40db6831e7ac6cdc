// src/app/ui/windows/upload_photo_window.rs
// Contains the drawing function for the standalone photo-asset upload panel.

use crate::app::{utils, IdeasApp};
use egui::{Align2, Context, RichText, TextureHandle, Window};
use log::info;
use std::path::PathBuf;

/// Working state of the upload panel while the `Upload` command is active.
#[derive(Default)]
pub struct UploadPhotoState {
    file: Option<PathBuf>,
    size: Option<u64>,
    thumb: Option<TextureHandle>,
}

// --- Window Drawing Function ---

/// Draws the "Upload photo" panel. Save hands the selection off to the
/// storage collaborator as a fire-and-forget task and closes the panel;
/// the result lands in the log or the error banner later. Saving with no
/// selection just closes the panel.
pub fn draw_upload_photo_window(app: &mut IdeasApp, ctx: &Context) {
    let Some(mut state) = app.upload_photo.take() else {
        return;
    };
    let mut open = true;
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    Window::new("Upload photo")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
        .show(ctx, |ui| {
            if ui.button("Choose photo").clicked() {
                if let Some(path) = utils::pick_image_file() {
                    state.size = std::fs::metadata(&path).ok().map(|meta| meta.len());
                    state.thumb = utils::load_image_from_path(ctx, &path);
                    state.file = Some(path);
                }
            }
            let selected = state
                .file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "No file selected".to_string());
            ui.label(&selected).on_hover_text(&selected);

            if let Some(file) = &state.file {
                ui.separator();
                match &state.thumb {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .max_size(egui::vec2(200.0, 150.0))
                                .maintain_aspect_ratio(true),
                        );
                    }
                    None => {
                        ui.label(RichText::new("No preview available").weak());
                    }
                }
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Name:").strong());
                    ui.label(
                        file.file_name()
                            .and_then(|name| name.to_str())
                            .unwrap_or("?"),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Size:").strong());
                    match state.size {
                        Some(bytes) => ui.label(utils::format_size(bytes)),
                        None => ui.label("unknown"),
                    };
                });
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    // --- Post-Window Logic ---
    if save_clicked {
        if let Some(path) = state.file.clone() {
            app.save_photo_asset(path);
        }
        app.dismiss_command();
        return;
    }
    if cancel_clicked || !open {
        info!("Photo upload cancelled.");
        app.dismiss_command();
        return;
    }
    app.upload_photo = Some(state);
}
