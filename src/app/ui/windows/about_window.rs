// src/app/ui/windows/about_window.rs
// Contains the drawing function for the About window.

use crate::app::{
    config::{APP_NAME, APP_VERSION},
    IdeasApp,
};
use egui::{Align2, Context, Window};

// --- Window Drawing Function ---

/// Draws the About window with the logo, name, and version.
pub fn draw_about_window(app: &mut IdeasApp, ctx: &Context) {
    let mut about_window_open = app.show_about_window;
    let mut close_button_clicked = false;

    Window::new("About ideabench")
        .open(&mut about_window_open)
        .collapsible(false)
        .resizable(false)
        .default_size(egui::vec2(320.0, 280.0))
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                if let Some(texture) = &app.logo_texture {
                    ui.add(
                        egui::Image::new(texture)
                            .max_size(egui::vec2(96.0, 96.0))
                            .maintain_aspect_ratio(true),
                    );
                } else {
                    ui.label("[Logo Load Failed]");
                }
                ui.add_space(8.0);
                ui.heading(APP_NAME);
                ui.label(format!("Version: {}", APP_VERSION));
                ui.add_space(8.0);
                ui.label("An inventory manager for cookie craft ideas.");
                ui.add_space(16.0);
                if ui.button("Close").clicked() {
                    close_button_clicked = true;
                }
            });
            ui.add_space(8.0);
        });

    if close_button_clicked {
        about_window_open = false;
    }
    app.show_about_window = about_window_open;
}
