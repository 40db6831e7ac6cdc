// src/app/ui/views/grid_view.rs
// Contains the UI drawing function for the card grid view of the inventory.

use crate::app::IdeasApp;
use egui::{RichText, ScrollArea, Ui};

const CARD_WIDTH: f32 = 180.0;
const CARD_IMAGE_HEIGHT: f32 = 120.0;
const CARD_SPACING: f32 = 12.0;

/// Draws the inventory as a grid of cards showing the same filtered items
/// as the table view.
pub fn draw_grid_view(app: &mut IdeasApp, ui: &mut Ui) {
    if app.row_cache_dirty {
        app.rebuild_row_cache();
    }

    if app.row_cache.is_empty() {
        if app.lifecycle.data_stale() {
            ui.label("Loading ideas...");
        } else if app.ideas.is_empty() {
            ui.label("There are currently no ideas to show. Click '+ New' to add one.");
        } else {
            ui.label("No ideas match the current filter.");
        }
        return;
    }

    let rows = app.row_cache.clone();
    let per_row = ((ui.available_width() / (CARD_WIDTH + CARD_SPACING)).floor() as usize).max(1);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("ideas_grid")
                .num_columns(per_row)
                .spacing([CARD_SPACING, CARD_SPACING])
                .show(ui, |ui| {
                    for (index, item) in rows.iter().enumerate() {
                        ui.group(|ui| {
                            ui.set_width(CARD_WIDTH);
                            ui.vertical(|ui| {
                                let ctx = ui.ctx().clone();
                                match app.thumbnail(&ctx, &item.idea_image) {
                                    Some(texture) => {
                                        ui.add(
                                            egui::Image::new(&texture)
                                                .max_size(egui::vec2(
                                                    CARD_WIDTH - 8.0,
                                                    CARD_IMAGE_HEIGHT,
                                                ))
                                                .maintain_aspect_ratio(true),
                                        );
                                    }
                                    None => {
                                        ui.label(RichText::new("No photo").weak());
                                    }
                                }
                                ui.label(RichText::new(&item.idea_name).strong());
                                if !item.cutter_name.is_empty() {
                                    ui.label(&item.cutter_name);
                                }
                                if !item.tags.is_empty() {
                                    ui.label(RichText::new(item.tags.join(", ")).weak().small());
                                }
                            });
                        });
                        if (index + 1) % per_row == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}
