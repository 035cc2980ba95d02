//! This module handles the application's configuration: user preferences
//! read from a `settings.toml` file, written out with defaults on first
//! run so there is always a file to edit.
//!
//! # Examples
//!
//! ```no_run
//! use iced_wheel::config;
//!
//! let config = config::load().unwrap_or_default();
//! println!("volume: {}", config.effective_volume());
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedWheel";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub sound_enabled: Option<bool>,
    #[serde(default)]
    pub volume: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            sound_enabled: Some(true),
            volume: Some(DEFAULT_VOLUME),
        }
    }
}

impl Config {
    /// Cue volume with out-of-range persisted values clamped back in.
    #[must_use]
    pub fn effective_volume(&self) -> f32 {
        self.volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    match get_default_config_path() {
        Some(path) => load_or_init(&path),
        None => Ok(Config::default()),
    }
}

/// Reads the settings at `path`. When no file exists yet the defaults
/// are written there first, so users have a file to edit; a failed
/// write is logged and does not block startup.
pub fn load_or_init(path: &Path) -> Result<Config> {
    if path.exists() {
        return load_from_path(path);
    }
    let config = Config::default();
    if let Err(err) = save_to_path(&config, path) {
        eprintln!("Failed to write default settings: {err}");
    }
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
