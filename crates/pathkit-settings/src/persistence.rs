//! Settings Persistence
//!
//! Loads and saves [`Preferences`] at a fixed location, by default
//! `<config dir>/pathkit/preferences.toml`.

use crate::config::Preferences;
use crate::error::{Result, SettingsError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pathkit";
const PREFERENCES_FILE: &str = "preferences.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    preferences: Preferences,
}

impl SettingsPersistence {
    /// Preferences file in the platform configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(config_dir.join(APP_DIR).join(PREFERENCES_FILE))
    }

    /// Loads the preferences at `path`, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let preferences = if path.exists() {
            Preferences::load_from_file(&path)?
        } else {
            tracing::info!(
                "No preferences at {}, using defaults",
                path.display()
            );
            Preferences::default()
        };
        Ok(Self { path, preferences })
    }

    /// Writes the preferences, creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.preferences.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to preferences
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Get mutable reference to preferences
    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }
}
