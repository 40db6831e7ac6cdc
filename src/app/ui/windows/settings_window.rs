// src/app/ui/windows/settings_window.rs
// Contains the drawing function for the Configure window: document paths, photos directory, and log level.

use crate::app::IdeasApp;
use egui::{Align2, ComboBox, Context, Grid, TextEdit, Window};
use log::{error, info};

// --- Window Drawing Function ---

/// Draws the "Configure" window and handles its interactions. Edits are
/// staged in `app.pending_settings`; Save & Close persists them and marks
/// both documents stale so the new paths take effect, while Cancel and
/// closing via 'X' discard the edits.
pub fn draw_settings_window(app: &mut IdeasApp, ctx: &Context) {
    let mut open = true;
    let mut save_and_close_clicked = false;
    let mut cancel_clicked = false;

    Window::new("Configure")
        .open(&mut open)
        .resizable(true)
        .default_width(460.0)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            if app.pending_settings.is_none() {
                error!("Settings window drawn without pending state initialized!");
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    "Internal error: State not initialized.",
                );
                return;
            }

            ui.heading("Runtime Settings");
            ui.label("These settings override .env/environment variables and are saved persistently.");
            if let Some(path) = &app.settings_file {
                ui.label(format!("Settings file: {}", path.display()));
            } else {
                ui.label("Settings file path not found.");
            }
            ui.label(format!(
                "Configuration document keys: {}",
                app.config_doc.len()
            ));
            ui.separator();

            let pending = app.pending_settings.as_mut().unwrap();
            Grid::new("settings_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Configuration file:");
                    ui.add(
                        TextEdit::singleline(&mut pending.config_path)
                            .hint_text("path of the JSON configuration document"),
                    );
                    ui.end_row();

                    ui.label("Ideas data file:");
                    ui.add(
                        TextEdit::singleline(&mut pending.data_path)
                            .hint_text("path of the JSON ideas document"),
                    );
                    ui.end_row();

                    ui.label("Photos directory:");
                    ui.add(
                        TextEdit::singleline(&mut pending.photos_dir)
                            .hint_text("directory uploaded photos are copied into"),
                    );
                    ui.end_row();

                    ui.label("Log Level:");
                    ComboBox::from_label("")
                        .selected_text(&pending.log_level)
                        .show_ui(ui, |ui| {
                            for level in ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"] {
                                ui.selectable_value(
                                    &mut pending.log_level,
                                    level.to_string(),
                                    level,
                                );
                            }
                        });
                    ui.end_row();
                });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save & Close").clicked() {
                    save_and_close_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
            ui.separator();
            ui.label("Note: Log Level changes take effect after an application restart.");
        });

    // --- Post-Window Logic ---
    if save_and_close_clicked {
        if let Some(saved_settings) = app.pending_settings.take() {
            app.settings = saved_settings;
            app.save_settings();
            // The document paths may have changed; reload both.
            app.lifecycle.mark_config_stale();
            app.lifecycle.mark_data_stale();
            info!("Settings updated and saved.");
        } else {
            error!("Save clicked but pending_settings was None!");
        }
        app.dismiss_command();
        return;
    }
    if cancel_clicked || !open {
        info!("Settings changes cancelled.");
        app.dismiss_command();
    }
}
