//! Game settings and preferences
//!
//! Persisted separately from the highscore file, with silent fallback to
//! defaults when the file is missing or unreadable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Show the score/speed/distance overlay while playing
    pub show_stats: bool,
    /// Black-on-white palette instead of the classic blues
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_stats: true,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Default settings location, in the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("dodger_settings.json")
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring unreadable settings {:?}: {}", path, err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to write settings {:?}: {}", path, err);
                }
            }
            Err(err) => log::warn!("Failed to encode settings: {}", err),
        }
    }
}
