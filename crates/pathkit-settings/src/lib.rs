//! PathKit Settings Crate
//!
//! Handles user preferences and their persistence in the platform
//! configuration directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::Preferences;
pub use error::{ConfigError, Result, SettingsError};
pub use persistence::SettingsPersistence;
