// src/main.rs
// Entry point for ideabench: loads the initial environment configuration, wires the logger into the UI update channel, and launches the eframe application.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use std::sync::mpsc::channel;

use eframe::egui;
use log::{info, LevelFilter};

use crate::app::config::{self, APP_NAME, APP_VERSION};
use crate::app::state::UpdateMessage;
use crate::app::IdeasApp;

fn main() -> Result<(), eframe::Error> {
    let initial_config = config::load_initial_config();

    let (update_sender, update_receiver) = channel();
    let logger_sender = update_sender.clone();

    // Initialize Logger
    let log_level_to_init = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        initial_config.log_level
    };
    env_logger::Builder::new()
        .filter_level(log_level_to_init)
        .format(move |buf, record| {
            use std::io::Write;
            let log_msg = format!(
                "[{}] [{}] {}",
                buf.timestamp(),
                record.level(),
                record.args()
            );
            // Send INFO and lower logs to the GUI
            if record.level() <= LevelFilter::Info {
                let _ = logger_sender.send(UpdateMessage::Log(log_msg.clone()));
            }
            writeln!(buf, "{}", log_msg) // Also write to console/default output
        })
        .init();

    info!("--- {} v{} Starting ---", APP_NAME, APP_VERSION);
    info!("--- Initial Environment Configuration ---");
    info!("CONFIG_PATH: {}", initial_config.config_path);
    info!("IDEAS_DATA_PATH: {}", initial_config.data_path);
    info!("PHOTOS_PATH: {}", initial_config.photos_dir);
    info!("LOG_LEVEL: {}", initial_config.log_level);
    info!("-----------------------------------------");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([920.0, 620.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(IdeasApp::new(cc, update_sender, update_receiver)))),
    )
}
