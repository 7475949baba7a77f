//! # PathKit
//!
//! Editor core for robot motion paths built from linear, cubic and quintic
//! Bezier segments.
//!
//! ## Architecture
//!
//! PathKit is organized as a workspace with multiple crates:
//!
//! 1. **pathkit-core** - Error types, geometry and unit helpers
//! 2. **pathkit-editor** - Path model, reconciliation, commands, history and file formats
//! 3. **pathkit-settings** - User preferences and their persistence
//! 4. **pathkit** - Re-exports, logging setup and a command line tool

pub use pathkit_editor::{commands, format, history, model, sampling, serialization, structure};

pub use pathkit_core::{
    Error, FormatError, GeometryError, ModelError, Result, UnitConverter, UnitOfLength, Vector,
};

pub use pathkit_editor::{
    CancellableCommand, CommandHistory, Control, ControlId, EditorSelection, EditorState,
    GeneralConfig, MergeableCommand, PathConfig, PathFileData, PathId, PathStore, PathTreeItem,
    SegmentId, SegmentVariant, SelectionTracker,
};

pub use pathkit_settings::{Preferences, SettingsError, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
