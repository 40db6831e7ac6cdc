// src/app/ui/windows/arrange_columns_window.rs
// Contains the drawing function for the Arrange Columns window used by the table view.

use crate::app::{columns, IdeasApp};
use egui::{Align, Align2, Button, Context, Layout, Window};
use log::{error, info};

// --- Window Drawing Function ---

/// Draws the "Arrange Columns" window. Changes are staged in
/// `app.pending_column_order` and only applied on OK; Cancel and closing
/// via 'X' discard them.
pub fn draw_arrange_columns_window(app: &mut IdeasApp, ctx: &Context) {
    if !app.show_arrange_columns {
        return;
    }
    let mut window_open = true;
    let mut ok_clicked = false;
    let mut cancel_clicked = false;

    if app.pending_column_order.is_none() {
        info!("Arrange Columns window opened, cloning current order to pending state.");
        app.pending_column_order = Some(app.column_order.clone());
    }

    Window::new("Arrange Columns")
        .open(&mut window_open)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let Some(pending) = app.pending_column_order.as_mut() else {
                error!("Arrange Columns window drawn without pending state initialized!");
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    "Internal error: State not initialized.",
                );
                return;
            };

            ui.label("Use the arrows to reorder the table columns:");
            ui.separator();

            let len = pending.len();
            let mut move_request: Option<(usize, usize)> = None;
            for (index, id) in pending.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.add_enabled(index > 0, Button::new("⬆").small()).clicked() {
                        move_request = Some((index, index - 1));
                    }
                    if ui
                        .add_enabled(index + 1 < len, Button::new("⬇").small())
                        .clicked()
                    {
                        move_request = Some((index, index + 1));
                    }
                    ui.label(id.display_name());
                });
            }
            if let Some((from, to)) = move_request {
                *pending = columns::reorder(pending, from, to);
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        cancel_clicked = true;
                    }
                    if ui.button("OK").clicked() {
                        ok_clicked = true;
                    }
                });
            });
        });

    // --- Post-Window Logic ---
    if ok_clicked {
        if let Some(pending) = app.pending_column_order.take() {
            app.column_order = pending;
            info!("Column order updated.");
        } else {
            error!("OK clicked but pending_column_order was None!");
        }
        window_open = false;
    } else if cancel_clicked {
        info!("Column arrangement cancelled.");
        app.pending_column_order = None;
        window_open = false;
    }

    // Handle closing via 'X'
    if !window_open && app.show_arrange_columns && !ok_clicked && !cancel_clicked {
        info!("Arrange Columns window closed via 'X'. Changes discarded.");
        app.pending_column_order = None;
    }

    app.show_arrange_columns = window_open;
    if !app.show_arrange_columns {
        app.pending_column_order = None;
    }
}
