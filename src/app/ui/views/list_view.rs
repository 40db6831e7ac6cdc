// src/app/ui/views/list_view.rs
// Contains the UI drawing function for the table view of the inventory, including column reordering via the header context menu.

use crate::app::{
    columns::{self, CellKind, ColumnId},
    IdeasApp,
};
use egui::{Button, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use log::info;

// --- View Drawing Functions ---

/// Draws the inventory as a table. Columns follow the user-configurable
/// order; an empty result renders an explicit affordance instead of an
/// empty table.
pub fn draw_list_view(app: &mut IdeasApp, ui: &mut Ui) {
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

    let defs = columns::resolve_columns(&app.column_order);
    let rows = app.row_cache.clone();
    let row_height = 56.0;

    let mut reorder_request: Option<(usize, usize)> = None;
    let mut open_arrange = false;

    let table_id = egui::Id::new("ideas_table");
    let mut builder = TableBuilder::new(ui).id_salt(table_id);
    for def in &defs {
        builder = builder.column(
            Column::initial(def.initial_width)
                .at_least(def.min_width)
                .resizable(true)
                .clip(true),
        );
    }

    builder
        .striped(true)
        .resizable(true)
        .header(22.0, |mut header| {
            for (index, def) in defs.iter().enumerate() {
                header.col(|ui| {
                    let response = ui
                        .add(Button::new(RichText::new(def.label).strong()))
                        .on_hover_text("Right-click to rearrange columns");
                    response.context_menu(|ui| {
                        if ui.add_enabled(index > 0, Button::new("Move left")).clicked() {
                            reorder_request = Some((index, index - 1));
                            ui.close_menu();
                        }
                        if ui
                            .add_enabled(index + 1 < defs.len(), Button::new("Move right"))
                            .clicked()
                        {
                            reorder_request = Some((index, index + 1));
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("Arrange columns...").clicked() {
                            open_arrange = true;
                            ui.close_menu();
                        }
                    });
                });
            }
        })
        .body(|body| {
            body.rows(row_height, rows.len(), |mut row| {
                let row_index = row.index();
                let item = &rows[row_index];
                for def in &defs {
                    row.col(|ui| match def.cell {
                        CellKind::Text => {
                            let text = match def.id {
                                ColumnId::IdeaName => item.idea_name.as_str(),
                                ColumnId::CutterName => item.cutter_name.as_str(),
                                _ => "",
                            };
                            ui.label(text);
                        }
                        CellKind::TagList => {
                            ui.label(item.tags.join(", "));
                        }
                        CellKind::Image => {
                            let path = match def.id {
                                ColumnId::IdeaImage => item.idea_image.as_str(),
                                _ => item.cutter_image.as_str(),
                            };
                            let ctx = ui.ctx().clone();
                            match app.thumbnail(&ctx, path) {
                                Some(texture) => {
                                    ui.add(
                                        egui::Image::new(&texture)
                                            .max_height(row_height - 4.0)
                                            .maintain_aspect_ratio(true),
                                    );
                                }
                                None if path.is_empty() => {
                                    ui.label("-");
                                }
                                None => {
                                    ui.label(RichText::new(path).weak().small())
                                        .on_hover_text("No preview available");
                                }
                            }
                        }
                    });
                }
            });
        });

    // Apply deferred header actions after the table released its borrows.
    if let Some((from, to)) = reorder_request {
        let moved = app.column_order[from];
        app.column_order = columns::reorder(&app.column_order, from, to);
        info!("Column '{}' moved to position {}.", moved.display_name(), to);
    }
    if open_arrange {
        app.show_arrange_columns = true;
    }
}
