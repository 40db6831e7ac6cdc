// src/app/mod.rs
// Main application logic for ideabench. Defines the IdeasApp struct, implements the eframe::App trait, and coordinates the view model, the load/refresh lifecycle, configuration, and the UI.

// Declare sibling modules within the `app` module
pub mod columns;
pub mod config;
pub mod filter;
pub mod lifecycle;
pub mod model;
pub mod state;
pub mod storage;
pub mod ui;
pub mod utils;
pub mod view_model;

use eframe::{
    egui::{self, CentralPanel, CollapsingHeader, Context, Separator, TopBottomPanel, ViewportCommand},
    App, CreationContext,
};
use log::{debug, error, info, warn};
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        mpsc::{Receiver, Sender},
        Arc,
    },
    time::Duration,
};
use tokio::runtime::Runtime;

use self::{
    columns::ColumnId,
    config::{AppSettings, APP_NAME, APP_VERSION},
    filter::Filter,
    lifecycle::Lifecycle,
    model::{Idea, Item},
    state::{ActiveCommand, UpdateMessage, ViewType},
    storage::ConfigDoc,
    ui::{views, widgets, windows},
    ui::windows::{
        add_idea_window::AddIdeaState, slideshow_window::SlideshowState,
        upload_photo_window::UploadPhotoState,
    },
    utils::{load_image_from_bytes, LOGO_BYTES},
};

// --- Main Application Struct ---

/// Holds the state and logic for the ideabench application.
pub struct IdeasApp {
    // --- Catalog Data (replaced wholesale by each successful load) ---
    config_doc: ConfigDoc,
    ideas: Vec<Idea>,

    // --- Derived View Cache ---
    row_cache: Vec<Item>,
    row_cache_dirty: bool,

    // --- View State ---
    view_type: ViewType,
    active_command: ActiveCommand,
    filter: Filter,
    filter_name: String,
    filter_cutter: String,
    filter_tag: String,
    column_order: Vec<ColumnId>,

    // --- Workflow State (at most one active, keyed by active_command) ---
    add_idea: Option<AddIdeaState>,
    upload_photo: Option<UploadPhotoState>,
    slideshow: Option<SlideshowState>,

    // --- Free Windows & Pending State ---
    show_arrange_columns: bool,
    pending_column_order: Option<Vec<ColumnId>>,
    pending_settings: Option<AppSettings>,
    show_about_window: bool,

    // --- Lifecycle & Configuration ---
    lifecycle: Lifecycle,
    settings: AppSettings,
    settings_file: Option<PathBuf>,
    pending_writes: usize,

    // --- Logs (fed by the logger through the update channel) ---
    logs: Vec<String>,
    logs_string_cache: String,
    logs_dirty: bool,
    logs_collapsed: bool,

    // --- Textures ---
    thumbnails: HashMap<String, Option<egui::TextureHandle>>,
    logo_texture: Option<egui::TextureHandle>,

    // --- Communication & Async ---
    task_update_sender: Sender<UpdateMessage>,
    update_receiver: Receiver<UpdateMessage>,
    rt: Arc<Runtime>,
}

// --- Application Implementation ---

impl IdeasApp {
    /// Creates a new instance of ideabench.
    pub fn new(
        cc: &CreationContext<'_>,
        task_update_sender: Sender<UpdateMessage>,
        update_receiver: Receiver<UpdateMessage>,
    ) -> Self {
        info!("Running IdeasApp::new - v{}", APP_VERSION);

        // --- Load Settings ---
        let (mut settings, settings_file) = match confy::load::<AppSettings>(APP_NAME, None) {
            Ok(cfg) => {
                info!("Successfully loaded settings from config file.");
                (cfg, confy::get_configuration_file_path(APP_NAME, None).ok())
            }
            Err(e) => {
                warn!(
                    "Failed to load config file ('{}'), using defaults: {}",
                    APP_NAME, e
                );
                let default_settings = AppSettings::default();
                let settings_file = confy::get_configuration_file_path(APP_NAME, None).ok();
                if let Err(store_err) = confy::store(APP_NAME, None, &default_settings) {
                    error!("Failed to store default settings: {}", store_err);
                } else {
                    info!("Stored default settings.");
                }
                (default_settings, settings_file)
            }
        };

        // Repair the persisted column order in case columns were added or
        // removed since the settings were written.
        let normalized_order = columns::normalize_order(&settings.column_order);
        let mut needs_resave = false;
        if normalized_order != settings.column_order {
            warn!("Mismatch between available columns and saved column order. Updating configuration.");
            settings.column_order = normalized_order;
            needs_resave = true;
        }

        if let Some(path) = &settings_file {
            info!("Using settings file: {}", path.display());
        } else {
            warn!("Could not determine settings file path.");
        }
        info!("--- Loaded Persistent Settings ---");
        info!("CONFIG_PATH: {}", settings.config_path);
        info!("IDEAS_DATA_PATH: {}", settings.data_path);
        info!("PHOTOS_PATH: {}", settings.photos_dir);
        info!("LOG_LEVEL: {}", settings.log_level);
        debug!("Column order: {:?}", settings.column_order);
        info!("--------------------------------");

        // Create the Tokio runtime
        let rt = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime"),
        );

        // Load the logo image for the About window
        let logo_texture = load_image_from_bytes(&cc.egui_ctx, "logo", LOGO_BYTES);
        if logo_texture.is_none() {
            error!("Failed to load embedded logo image from '../assets/ideabench.png'.");
        }

        let mut app = Self {
            config_doc: ConfigDoc::new(),
            ideas: Vec::new(),
            row_cache: Vec::new(),
            row_cache_dirty: true,
            view_type: ViewType::List,
            active_command: ActiveCommand::None,
            filter: Filter::new(),
            filter_name: String::new(),
            filter_cutter: String::new(),
            filter_tag: String::new(),
            column_order: settings.column_order.clone(),
            add_idea: None,
            upload_photo: None,
            slideshow: None,
            show_arrange_columns: false,
            pending_column_order: None,
            pending_settings: None,
            show_about_window: false,
            // Both flags start stale, so the first frames spawn the
            // initial config and data loads.
            lifecycle: Lifecycle::new(),
            settings,
            settings_file,
            pending_writes: 0,
            logs: Vec::new(),
            logs_string_cache: String::new(),
            logs_dirty: true,
            logs_collapsed: true,
            thumbnails: HashMap::new(),
            logo_texture,
            task_update_sender,
            update_receiver,
            rt,
        };

        if needs_resave {
            app.save_settings();
        }

        app
    }

    /// Rebuilds the cached log string if the logs are marked as dirty.
    fn rebuild_log_cache(&mut self) {
        if self.logs_dirty {
            self.logs_string_cache = self.logs.join("\n");
            self.logs_dirty = false;
        }
    }

    /// Rebuilds the filtered row cache from the raw collection and the
    /// current filter. Correctness does not depend on this cache; it only
    /// avoids re-projecting every idea on every frame.
    fn rebuild_row_cache(&mut self) {
        debug!(
            "Rebuilding row cache ({} ideas, filter: {:?})",
            self.ideas.len(),
            self.filter
        );
        let filter = if self.filter.is_empty() {
            None
        } else {
            Some(&self.filter)
        };
        self.row_cache = view_model::visible_items(&self.ideas, filter);
        self.row_cache_dirty = false;
    }

    /// Assembles the filter from the three filter inputs. Blank inputs
    /// contribute no constraint.
    fn current_filter(&self) -> Filter {
        let mut filter = Filter::new();
        if !self.filter_name.trim().is_empty() {
            filter.set("ideaName", self.filter_name.trim());
        }
        if !self.filter_cutter.trim().is_empty() {
            filter.set("cutterName", self.filter_cutter.trim());
        }
        if !self.filter_tag.trim().is_empty() {
            filter.set("tags", self.filter_tag.trim());
        }
        filter
    }

    /// Saves the current `self.settings` to the persistent configuration
    /// file using confy.
    fn save_settings(&mut self) {
        self.settings.column_order = self.column_order.clone();
        match confy::store(APP_NAME, None, &self.settings) {
            Ok(_) => {
                info!("Settings saved successfully.");
            }
            Err(e) => {
                error!("Failed to save settings: {}", e);
            }
        }
    }

    // --- Load/Refresh Lifecycle ---

    /// Spawns the asynchronous load attempts the lifecycle asks for. Each
    /// stale flag yields at most one in-flight load; completions come back
    /// through the update channel carrying their token.
    fn pump_loads(&mut self) {
        if let Some(token) = self.lifecycle.begin_config_load() {
            let path = self.settings.config_path.clone();
            let sender = self.task_update_sender.clone();
            info!("Loading configuration document...");
            self.rt.spawn(async move {
                let result = storage::load_config_doc(&path)
                    .await
                    .map_err(|e| e.to_string());
                let _ = sender.send(UpdateMessage::ConfigLoaded { token, result });
            });
        }
        if let Some(token) = self.lifecycle.begin_data_load() {
            let path = self.settings.data_path.clone();
            let sender = self.task_update_sender.clone();
            info!("Loading ideas data document...");
            self.rt.spawn(async move {
                let result = storage::load_ideas(&path).await.map_err(|e| e.to_string());
                let _ = sender.send(UpdateMessage::DataLoaded { token, result });
            });
        }
    }

    /// Applies one message from a background task or the logger.
    fn apply_message(&mut self, msg: UpdateMessage) {
        match msg {
            UpdateMessage::Log(log_line) => {
                self.logs.push(log_line);
                self.logs_dirty = true;
            }
            UpdateMessage::ConfigLoaded { token, result } => {
                if !self.lifecycle.finish_config_load(token) {
                    debug!("Discarding stale configuration load result.");
                    return;
                }
                match result {
                    Ok(doc) => {
                        info!("Configuration document loaded ({} keys).", doc.len());
                        self.config_doc = doc;
                    }
                    Err(message) => {
                        error!("Failed to load configuration: {}", message);
                        self.lifecycle.set_error(message);
                        self.config_doc = ConfigDoc::new();
                    }
                }
            }
            UpdateMessage::DataLoaded { token, result } => {
                if !self.lifecycle.finish_data_load(token) {
                    debug!("Discarding stale data load result.");
                    return;
                }
                match result {
                    Ok(ideas) => {
                        info!("Loaded {} ideas.", ideas.len());
                        self.ideas = ideas;
                    }
                    Err(message) => {
                        error!("Failed to load ideas: {}", message);
                        self.lifecycle.set_error(message);
                        self.ideas = Vec::new();
                    }
                }
                // Image files may have changed along with the collection.
                self.thumbnails.clear();
                self.row_cache_dirty = true;
            }
            UpdateMessage::IdeaAppended { result } => {
                self.pending_writes = self.pending_writes.saturating_sub(1);
                match result {
                    Ok(name) => {
                        info!("Idea '{}' saved to the data document.", name);
                        // The table refreshes from storage rather than
                        // patching the in-memory collection.
                        self.lifecycle.mark_data_stale();
                    }
                    Err(message) => {
                        error!("Failed to save idea: {}", message);
                        self.lifecycle.set_error(message);
                    }
                }
            }
            UpdateMessage::PhotoSaved { result } => {
                self.pending_writes = self.pending_writes.saturating_sub(1);
                match result {
                    Ok(name) => info!("Photo asset '{}' saved.", name),
                    Err(message) => {
                        error!("Failed to save photo asset: {}", message);
                        self.lifecycle.set_error(message);
                    }
                }
            }
        }
    }

    // --- Mutation Intake Hand-Offs ---

    /// Appends a validated idea to the persisted data document and marks
    /// the data stale on completion, triggering a reload.
    fn append_idea(&mut self, idea: Idea) {
        let path = self.settings.data_path.clone();
        let sender = self.task_update_sender.clone();
        let name = idea.name.clone();
        info!("Appending idea '{}' to the data document...", name);
        self.pending_writes += 1;
        self.rt.spawn(async move {
            let result = storage::append_idea(&path, idea)
                .await
                .map(|_| name)
                .map_err(|e| e.to_string());
            let _ = sender.send(UpdateMessage::IdeaAppended { result });
        });
    }

    /// Copies a selected photo into the photos directory, fire-and-forget.
    /// Failures surface in the error slot; no staleness flag is touched
    /// because the idea collection is unaffected.
    fn save_photo_asset(&mut self, source: PathBuf) {
        let photos_dir = self.settings.photos_dir.clone();
        let sender = self.task_update_sender.clone();
        info!("Saving photo asset '{}'...", source.display());
        self.pending_writes += 1;
        self.rt.spawn(async move {
            let result = storage::save_photo(&photos_dir, &source)
                .await
                .map_err(|e| e.to_string());
            let _ = sender.send(UpdateMessage::PhotoSaved { result });
        });
    }

    // --- Active Command ---

    /// Opens a workflow. Commands are mutually exclusive: nothing activates
    /// while another command is open (the UI also disables the triggers).
    fn activate_command(&mut self, command: ActiveCommand) {
        if self.active_command != ActiveCommand::None {
            warn!(
                "Ignoring command {:?} while {:?} is active.",
                command, self.active_command
            );
            return;
        }
        match command {
            ActiveCommand::New => self.add_idea = Some(AddIdeaState::default()),
            ActiveCommand::Upload => self.upload_photo = Some(UploadPhotoState::default()),
            ActiveCommand::Slideshow => self.slideshow = Some(SlideshowState::default()),
            ActiveCommand::ViewType => {
                // Transient command: toggle and return straight to None.
                self.view_type = match self.view_type {
                    ViewType::List => ViewType::Grid,
                    ViewType::Grid => ViewType::List,
                };
                info!("View switched to {:?}.", self.view_type);
                return;
            }
            ActiveCommand::Configure => {
                info!("Configure opened, cloning current settings to pending state.");
                self.pending_settings = Some(self.settings.clone());
            }
            ActiveCommand::None => {}
        }
        self.active_command = command;
    }

    /// Closes the active workflow and drops its pending state.
    fn dismiss_command(&mut self) {
        self.add_idea = None;
        self.upload_photo = None;
        self.slideshow = None;
        self.pending_settings = None;
        self.active_command = ActiveCommand::None;
    }

    // --- Thumbnails ---

    /// Loads (and caches) the thumbnail texture for an image path. Paths
    /// that are empty, not previewable, or fail to decode cache as None.
    fn thumbnail(&mut self, ctx: &Context, path: &str) -> Option<egui::TextureHandle> {
        if path.is_empty() {
            return None;
        }
        if let Some(cached) = self.thumbnails.get(path) {
            return cached.clone();
        }
        let texture = utils::load_image_from_path(ctx, std::path::Path::new(path));
        self.thumbnails.insert(path.to_string(), texture.clone());
        texture
    }
}

// --- eframe::App Implementation ---

impl App for IdeasApp {
    /// Called once before shutdown.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down {}.", APP_NAME);
        // Attempt to save settings on exit (best effort)
        self.save_settings();
    }

    /// Called on each frame to update the UI and handle events.
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let prev_column_order = self.column_order.clone();

        // --- 1. Process MPSC Messages ---
        let mut messages_to_process = Vec::new();
        while let Ok(msg) = self.update_receiver.try_recv() {
            messages_to_process.push(msg);
        }
        for msg in messages_to_process {
            self.apply_message(msg);
        }

        // --- 2. Spawn Loads the Lifecycle Requires ---
        self.pump_loads();

        // --- 3. Recompute the Filter From Its Inputs ---
        let next_filter = self.current_filter();
        if next_filter != self.filter {
            debug!("Filter changed: {:?}", next_filter);
            self.filter = next_filter;
            self.row_cache_dirty = true;
        }

        // --- 4. Rebuild Log Cache ---
        self.rebuild_log_cache();

        // --- 5. Draw Top Panel (Menu and Command Bar) ---
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("Copy Logs").clicked() {
                        if self.logs_string_cache.is_empty() {
                            warn!("Log buffer is empty, nothing to copy.");
                        } else {
                            ctx.copy_text(self.logs_string_cache.clone());
                            info!("Logs copied to clipboard.");
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.show_about_window = true;
                        ui.close_menu();
                    }
                });
            });
            ui.add_space(4.0);
            widgets::draw_command_bar(self, ui);
            ui.add_space(4.0);
            ui.add(Separator::default().spacing(0.0));
        });

        // --- 6. Draw Bottom Panel (Logs) ---
        TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .show_separator_line(true)
            .show(ctx, |ui| {
                let header_response = CollapsingHeader::new("Logs")
                    .default_open(!self.logs_collapsed)
                    .show(ui, |ui| {
                        widgets::draw_log_view_content(self, ui);
                    });
                if header_response.header_response.clicked() {
                    self.logs_collapsed = header_response.body_returned.is_none();
                }
                header_response
                    .header_response
                    .on_hover_text("Click to expand/collapse logs");
            });

        // --- 7. Draw Central Panel (Banner, Filter Row, Inventory) ---
        CentralPanel::default().show(ctx, |ui| {
            widgets::draw_error_banner(self, ui);
            widgets::draw_filter_row(self, ui);
            ui.separator();
            match self.view_type {
                ViewType::List => views::list_view::draw_list_view(self, ui),
                ViewType::Grid => views::grid_view::draw_grid_view(self, ui),
            }
        });

        // --- 8. Draw Modals / Separate Windows After the Panels ---
        match self.active_command {
            ActiveCommand::New => windows::add_idea_window::draw_add_idea_window(self, ctx),
            ActiveCommand::Upload => {
                windows::upload_photo_window::draw_upload_photo_window(self, ctx)
            }
            ActiveCommand::Slideshow => {
                windows::slideshow_window::draw_slideshow_window(self, ctx)
            }
            ActiveCommand::Configure => windows::settings_window::draw_settings_window(self, ctx),
            ActiveCommand::ViewType | ActiveCommand::None => {}
        }
        windows::arrange_columns_window::draw_arrange_columns_window(self, ctx);
        if self.show_about_window {
            windows::about_window::draw_about_window(self, ctx);
        }

        // --- 9. Persist Column Order Changes Detected After Drawing ---
        if self.column_order != prev_column_order {
            debug!("Column order changed detected after drawing UI.");
            self.save_settings();
        }

        // --- 10. Keep Repainting While Background Work Is Pending ---
        if self.lifecycle.load_in_flight() || self.pending_writes > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
