// src/app/ui/windows/add_idea_window.rs
// Contains the drawing function for the add-idea panel: form fields, photo pickers with thumbnail previews, and validation on save.

use crate::app::{
    model::{DraftErrors, IdeaDraft},
    utils, IdeasApp,
};
use egui::{Align2, Context, RichText, TextEdit, TextureHandle, Window};
use log::info;

const THUMB_SIZE: egui::Vec2 = egui::Vec2::new(140.0, 100.0);

/// Working state of the add-idea panel while the `New` command is active.
#[derive(Default)]
pub struct AddIdeaState {
    pub draft: IdeaDraft,
    pub errors: DraftErrors,
    idea_thumb: Option<TextureHandle>,
    cutter_thumb: Option<TextureHandle>,
}

// --- Window Drawing Function ---

/// Draws the "Add new idea" panel. On Save the draft is validated against
/// the existing names; a valid draft is handed off exactly once to the
/// append workflow and the panel closes. Validation failures keep the
/// panel open with field-level errors.
pub fn draw_add_idea_window(app: &mut IdeasApp, ctx: &Context) {
    let Some(mut state) = app.add_idea.take() else {
        return;
    };
    let mut open = true;
    let mut save_clicked = false;
    let mut cancel_clicked = false;

    Window::new("Add new idea")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
        .show(ctx, |ui| {
            ui.label("Idea name (unique):");
            ui.add(TextEdit::singleline(&mut state.draft.name).desired_width(f32::INFINITY));
            if let Some(message) = &state.errors.name {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            ui.add_space(6.0);

            draw_photo_section(
                ui,
                ctx,
                "Choose idea photo",
                &mut state.draft.idea_image,
                &mut state.idea_thumb,
            );
            ui.label("Idea photo:");
            ui.add(TextEdit::singleline(&mut state.draft.idea_image).desired_width(f32::INFINITY));
            ui.add_space(6.0);

            ui.label("Cutter:");
            ui.add(TextEdit::singleline(&mut state.draft.cutter).desired_width(f32::INFINITY));
            ui.add_space(6.0);

            draw_photo_section(
                ui,
                ctx,
                "Choose cutter photo",
                &mut state.draft.cutter_image,
                &mut state.cutter_thumb,
            );
            ui.label("Cutter photo:");
            ui.add(
                TextEdit::singleline(&mut state.draft.cutter_image).desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            ui.label("Tags:");
            ui.add(
                TextEdit::singleline(&mut state.draft.tags_string)
                    .hint_text("comma, separated")
                    .desired_width(f32::INFINITY),
            );

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
        let existing_names: Vec<&str> = app.ideas.iter().map(|idea| idea.name.as_str()).collect();
        match state.draft.validate(&existing_names) {
            Ok(idea) => {
                app.append_idea(idea);
                app.dismiss_command();
                return;
            }
            Err(errors) => {
                info!("Add idea blocked by validation.");
                state.errors = errors;
            }
        }
    } else if cancel_clicked || !open {
        info!("Add idea cancelled.");
        app.dismiss_command();
        return;
    }
    app.add_idea = Some(state);
}

/// Draws one photo slot: the thumbnail (or its placeholder) and the file
/// picker button. The picker fills the path field and refreshes the
/// thumbnail; a selection that is not a previewable image type is still
/// accepted, it just shows no preview.
fn draw_photo_section(
    ui: &mut egui::Ui,
    ctx: &Context,
    label: &str,
    image_path: &mut String,
    thumb: &mut Option<TextureHandle>,
) {
    match thumb {
        Some(texture) => {
            ui.add(
                egui::Image::new(&*texture)
                    .max_size(THUMB_SIZE)
                    .maintain_aspect_ratio(true),
            );
        }
        None if image_path.is_empty() => {
            ui.label(RichText::new("No photo selected").weak());
        }
        None => {
            ui.label(RichText::new("No preview available").weak());
        }
    }
    if ui.button(label).clicked() {
        if let Some(path) = utils::pick_image_file() {
            *image_path = path.display().to_string();
            *thumb = utils::load_image_from_path(ctx, &path);
        }
    }
}
