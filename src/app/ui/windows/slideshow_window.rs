// src/app/ui/windows/slideshow_window.rs
// Contains the drawing function for the slideshow window, cycling through the filtered items' idea photos.

use crate::app::IdeasApp;
use egui::{Align2, Button, Context, RichText, Window};

/// Working state of the slideshow while the `Slideshow` command is active.
#[derive(Default)]
pub struct SlideshowState {
    index: usize,
}

// --- Window Drawing Function ---

/// Draws the slideshow over the same filtered rows the table shows,
/// loading each photo on demand through the shared thumbnail cache.
pub fn draw_slideshow_window(app: &mut IdeasApp, ctx: &Context) {
    if app.row_cache_dirty {
        app.rebuild_row_cache();
    }
    let rows = app.row_cache.clone();

    let Some(mut state) = app.slideshow.take() else {
        return;
    };
    let mut open = true;
    let mut close_clicked = false;

    Window::new("Slideshow")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if rows.is_empty() {
                ui.label("There are currently no ideas to show.");
            } else {
                // The row list may have shrunk since the last frame.
                state.index = state.index.min(rows.len() - 1);
                let item = &rows[state.index];

                ui.vertical_centered(|ui| {
                    ui.heading(&item.idea_name);
                    match app.thumbnail(ctx, &item.idea_image) {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(&texture)
                                    .max_size(egui::vec2(480.0, 360.0))
                                    .maintain_aspect_ratio(true),
                            );
                        }
                        None => {
                            ui.label(RichText::new("No preview available for this photo.").weak());
                        }
                    }
                    if !item.tags.is_empty() {
                        ui.label(RichText::new(item.tags.join(", ")).weak());
                    }
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(state.index > 0, Button::new("◀ Previous"))
                        .clicked()
                    {
                        state.index -= 1;
                    }
                    ui.label(format!("{} / {}", state.index + 1, rows.len()));
                    if ui
                        .add_enabled(state.index + 1 < rows.len(), Button::new("Next ▶"))
                        .clicked()
                    {
                        state.index += 1;
                    }
                });
            }
            ui.separator();
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if close_clicked || !open {
        app.dismiss_command();
        return;
    }
    app.slideshow = Some(state);
}
