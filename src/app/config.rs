// src/app/config.rs
// Configuration structures and loading for ideabench: initial environment configuration for logger setup and defaults, plus the persistent settings stored via confy.

use crate::app::columns::{self, ColumnId};

use dotenvy::dotenv;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};

// --- Global Configuration Block ---
pub const APP_NAME: &str = "ideabench";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

// --- Configuration Structs ---

/// Configuration loaded initially from environment/.env, used for logger
/// setup and as the defaults for first-run persistent settings. The path
/// variables may legitimately be absent; a missing path only becomes a
/// user-visible error when the corresponding load runs.
#[derive(Clone, Debug)]
pub struct InitialConfig {
    pub config_path: String,
    pub data_path: String,
    pub photos_dir: String,
    pub log_level: LevelFilter,
}

/// Persistently stored application settings using confy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Path of the externally-owned configuration document (JSON object).
    pub config_path: String,
    /// Path of the externally-owned ideas data document (JSON array).
    pub data_path: String,
    /// Directory uploaded photo assets are copied into.
    pub photos_dir: String,
    pub log_level: String,
    #[serde(default = "columns::default_order")]
    pub column_order: Vec<ColumnId>,
}

impl Default for AppSettings {
    fn default() -> Self {
        let initial_config = load_initial_config();
        AppSettings {
            config_path: initial_config.config_path,
            data_path: initial_config.data_path,
            photos_dir: initial_config.photos_dir,
            log_level: initial_config.log_level.to_string(),
            column_order: columns::default_order(),
        }
    }
}

// --- Configuration Loading Functions ---

/// Loads the *initial* configuration settings.
/// Priority: Environment Variables > .env file > Hardcoded Defaults.
/// This runs before the logger is initialized, so problems are reported
/// via eprintln.
pub fn load_initial_config() -> InitialConfig {
    dotenv().ok();

    let config_path = env::var("CONFIG_PATH").unwrap_or_default();
    let data_path = env::var("IDEAS_DATA_PATH").unwrap_or_default();
    let photos_dir = env::var("PHOTOS_PATH").unwrap_or_default();

    let log_level_str = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let log_level = LevelFilter::from_str(&log_level_str).unwrap_or_else(|err| {
        eprintln!(
            "WARN: Invalid LOG_LEVEL '{}' from env/default. Falling back to {}. Error: {}",
            log_level_str, DEFAULT_LOG_LEVEL, err
        );
        LevelFilter::from_str(DEFAULT_LOG_LEVEL).expect("Default log level is invalid")
    });

    InitialConfig {
        config_path,
        data_path,
        photos_dir,
        log_level,
    }
}
