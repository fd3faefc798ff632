use super::RenderConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the optional override file looked up next to the executable
pub const SETTINGS_FILE_NAME: &str = "mockups.json";

impl RenderConfig {
    /// Get the path to the settings file (in the same directory as the executable)
    pub fn get_config_path() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()))
            .map(|dir| dir.join(SETTINGS_FILE_NAME))
    }

    /// Load the render configuration, or return defaults if no settings file is present
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine executable directory. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load overrides from `config_path`, falling back to defaults if the file
    /// doesn't exist, is corrupted or fails [`RenderConfig::validate`]
    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<RenderConfig>(&contents) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        info!("Loaded render settings from: {:?}", config_path);
                        info!("Rendering with overrides instead of the stock presentation");
                        config
                    }
                    Err(e) => {
                        warn!("Rejected settings file {:?}: {}. Using defaults.", config_path, e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!(
                        "Failed to parse settings file {:?}: {}. Using defaults.",
                        config_path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                // Running without a settings file is the normal case
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read settings file {:?}: {}. Using defaults.", config_path, e);
                } else {
                    info!("No settings file found. Using defaults.");
                }
                Self::default()
            }
        }
    }
}
