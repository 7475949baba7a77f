//! Configuration Management
//!
//! User preferences of the path editor:
//! - Undo history depth and merge window
//! - Default sampling density for new documents
//!
//! Preferences are stored as JSON or TOML, chosen by file extension.

use crate::error::{ConfigError, Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Maximum number of committed entries kept on the undo stack
    pub max_history: usize,
    /// Window in milliseconds within which same-titled edits merge
    pub merge_timeout_ms: u64,
    /// Distance between sampled points for new documents
    pub point_density: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_history: 50,
            merge_timeout_ms: 500,
            point_density: 2.0,
        }
    }
}

enum FileKind {
    Json,
    Toml,
}

fn file_kind(path: &Path) -> Result<FileKind> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileKind::Json),
        Some("toml") => Ok(FileKind::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into()),
    }
}

impl Preferences {
    /// Create new preferences with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_timeout(&self) -> Duration {
        Duration::from_millis(self.merge_timeout_ms)
    }

    /// Load preferences from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let kind = file_kind(path)?;
        let content = std::fs::read_to_string(path)?;

        let preferences: Self = match kind {
            FileKind::Json => serde_json::from_str(&content)?,
            FileKind::Toml => toml::from_str(&content)?,
        };

        preferences.validate()?;
        tracing::debug!("Loaded preferences from {}", path.display());
        Ok(preferences)
    }

    /// Save preferences to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match file_kind(path)? {
            FileKind::Json => serde_json::to_string_pretty(self)?,
            FileKind::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Validate preferences
    pub fn validate(&self) -> Result<()> {
        if self.max_history == 0 {
            return Err(SettingsError::invalid("max_history", "must be > 0"));
        }

        if !self.point_density.is_finite() || self.point_density <= 0.0 {
            return Err(SettingsError::invalid(
                "point_density",
                "must be a positive number",
            ));
        }

        Ok(())
    }
}
