//! Highscore persistence boundary
//!
//! The simulation core never touches I/O; it talks to a [`HighscoreStore`].
//! A missing or unreadable save is never fatal - it just means a highscore
//! of zero.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage collaborator for the persisted highscore
pub trait HighscoreStore {
    /// Load the stored highscore, defaulting to 0 when absent or corrupt
    fn load(&self) -> u32;
    /// Persist a new highscore
    fn save(&mut self, highscore: u32);
}

/// Versioned JSON envelope for the save file
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    highscore: u32,
}

/// Highscore persisted as a small JSON file next to the executable
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default save location, in the working directory like the original
    pub fn default_path() -> PathBuf {
        PathBuf::from("dodger_save.json")
    }
}

impl HighscoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No highscore file at {:?}, starting fresh", self.path);
                return 0;
            }
        };
        match serde_json::from_str::<SaveFile>(&json) {
            Ok(save) => {
                log::info!("Loaded highscore {}", save.highscore);
                save.highscore
            }
            Err(err) => {
                log::warn!("Corrupt highscore file {:?}: {}", self.path, err);
                0
            }
        }
    }

    fn save(&mut self, highscore: u32) {
        let save = SaveFile { highscore };
        let json = match serde_json::to_string(&save) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to encode highscore: {}", err);
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => log::info!("Highscore {} saved", highscore),
            Err(err) => log::warn!("Failed to write {:?}: {}", self.path, err),
        }
    }
}

/// In-memory store for tests and headless demos
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: u32,
    /// Number of times `save` was invoked
    pub saves: u32,
}

impl HighscoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, highscore: u32) {
        self.value = highscore;
        self.saves += 1;
    }
}
