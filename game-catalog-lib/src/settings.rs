//! Shared application settings.
//!
//! Stored at `~/.config/game-catalog/settings.toml`. A missing or corrupt file
//! yields defaults; saving writes a temp file and renames it into place.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use game_catalog_core::SortKey;

use crate::storage::write_atomic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogSettings {
    /// YAML dataset to load at startup.
    pub dataset_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    /// Directory for the favorites and activity payloads.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_sort")]
    pub default_sort: String,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_recent_activity")]
    pub recent_activity: usize,
}

fn default_sort() -> String {
    SortKey::Name.as_str().to_string()
}

fn default_featured_count() -> usize {
    4
}

fn default_recent_activity() -> usize {
    10
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            featured_count: default_featured_count(),
            recent_activity: default_recent_activity(),
        }
    }
}

impl DisplaySettings {
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_str_loose(&self.default_sort)
    }
}

impl AppSettings {
    /// Data directory from settings, else the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Returns `~/.config/game-catalog/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("game-catalog").join("settings.toml")
}

/// Returns `~/.local/share/game-catalog` (or the platform equivalent).
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("game-catalog")
}

/// Parse settings text, returning defaults if it is corrupt.
pub fn parse_settings(contents: &str) -> AppSettings {
    toml::from_str(contents).unwrap_or_else(|e| {
        log::warn!("Failed to parse settings: {}", e);
        AppSettings::default()
    })
}

/// Load settings from the standard location. See [`load_settings_from`].
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file means defaults; any other read
/// failure is logged and also yields defaults.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppSettings::default(),
        Err(e) => {
            log::warn!("Failed to read settings {}: {}", path.display(), e);
            AppSettings::default()
        }
    }
}

/// Save settings to the standard location.
pub fn save_settings(settings: &AppSettings) -> std::io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    write_atomic(path, &contents)?;
    log::debug!("Saved settings to {}", path.display());
    Ok(())
}
