// src/app/ui/widgets.rs
// Reusable UI components: the command bar, the dismissible error banner, the filter row, and the log view content area.

use crate::app::{
    state::{ActiveCommand, ViewType},
    IdeasApp,
};
use egui::{Align, Button, Layout, RichText, ScrollArea, TextEdit, TextWrapMode, Ui};

// --- Widget Drawing Functions ---

/// Draws the command bar: New, Photo asset, and Slideshow on the left,
/// the view-type toggle and Configure on the right. Every trigger is
/// disabled while any command is active.
pub fn draw_command_bar(app: &mut IdeasApp, ui: &mut Ui) {
    let disabled = app.active_command != ActiveCommand::None;

    ui.horizontal(|ui| {
        if ui.add_enabled(!disabled, Button::new("➕ New")).clicked() {
            app.activate_command(ActiveCommand::New);
        }
        if ui
            .add_enabled(!disabled, Button::new("📷 Photo asset"))
            .on_hover_text("Upload a standalone photo asset")
            .clicked()
        {
            app.activate_command(ActiveCommand::Upload);
        }
        if ui
            .add_enabled(!disabled, Button::new("▶ Slideshow"))
            .clicked()
        {
            app.activate_command(ActiveCommand::Slideshow);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add_enabled(!disabled, Button::new("⚙ Configure"))
                .on_hover_text("Configure app")
                .clicked()
            {
                app.activate_command(ActiveCommand::Configure);
            }
            let view_label = match app.view_type {
                ViewType::List => "▦ Grid view",
                ViewType::Grid => "☰ List view",
            };
            if ui.add_enabled(!disabled, Button::new(view_label)).clicked() {
                app.activate_command(ActiveCommand::ViewType);
            }
        });
    });
}

/// Draws the dismissible banner showing the latest error, when one is set.
/// Dismissal only clears the banner; it never retries the failed
/// operation.
pub fn draw_error_banner(app: &mut IdeasApp, ui: &mut Ui) {
    let Some(message) = app.lifecycle.error().map(str::to_string) else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(ui.visuals().error_fg_color, RichText::new(&message));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                app.lifecycle.dismiss_error();
            }
        });
    });
    ui.separator();
}

/// Draws the filter inputs and the refresh control. The three inputs feed
/// the tags/name/cutter constraints; blank inputs contribute nothing.
pub fn draw_filter_row(app: &mut IdeasApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Filter:");
        ui.add(
            TextEdit::singleline(&mut app.filter_name)
                .hint_text("name pattern")
                .desired_width(140.0),
        );
        ui.add(
            TextEdit::singleline(&mut app.filter_cutter)
                .hint_text("cutter pattern")
                .desired_width(140.0),
        );
        ui.add(
            TextEdit::singleline(&mut app.filter_tag)
                .hint_text("tag")
                .desired_width(100.0),
        );
        if ui.small_button("Clear").clicked() {
            app.filter_name.clear();
            app.filter_cutter.clear();
            app.filter_tag.clear();
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let refreshing = app.lifecycle.config_stale()
                || app.lifecycle.data_stale()
                || app.lifecycle.load_in_flight();
            if ui
                .add_enabled(!refreshing, Button::new("🔄 Refresh"))
                .on_hover_text("Reload the configuration and data documents")
                .clicked()
            {
                app.lifecycle.mark_config_stale();
                app.lifecycle.mark_data_stale();
            }
            if app.lifecycle.load_in_flight() {
                ui.spinner();
                ui.label("Loading...");
            }
        });
    });
}

/// Draws the content area for the collapsible log view. Called within a
/// CollapsingHeader in the bottom panel.
pub fn draw_log_view_content(app: &mut IdeasApp, ui: &mut Ui) {
    ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Ensure the label uses the full available width and doesn't center text
            ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                ui.add(
                    egui::Label::new(RichText::new(&app.logs_string_cache).monospace())
                        .wrap_mode(TextWrapMode::Extend),
                );
            });
        });
}
