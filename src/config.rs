// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AlbumLens";

pub const DEFAULT_THUMBNAIL_HEIGHT: u16 = 160;
pub const MIN_THUMBNAIL_HEIGHT: u16 = 64;
pub const MAX_THUMBNAIL_HEIGHT: u16 = 512;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub thumbnail_height: Option<u16>,
    /// Gallery reopened on startup when no path is given on the command line.
    #[serde(default)]
    pub last_gallery: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            thumbnail_height: Some(DEFAULT_THUMBNAIL_HEIGHT),
            last_gallery: None,
        }
    }
}

/// Keeps persisted thumbnail sizes inside the supported range so stale
/// configs cannot request nonsensical layouts.
pub fn clamp_thumbnail_height(value: u16) -> u16 {
    value.clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
