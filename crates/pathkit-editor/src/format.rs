//! Path file formats
//!
//! A [`Format`] turns a robot library's path file into [`PathFileData`] and
//! back. Exported files carry the full editor data on a trailing
//! [`DATA_MARKER`] line; on import that line is preferred over the numeric
//! data because it keeps everything the numeric data cannot express.

pub mod lemlib;

pub use lemlib::LemLibFormatV0_4;

use crate::model::{GeneralConfig, PathConfig, PathId, PathStore};
use crate::sampling::PathSampler;
use crate::serialization::PathFileData;
use pathkit_core::FormatError;

/// Prefix of the line holding the embedded editor data.
pub const DATA_MARKER: &str = "#PATH.JERRYIO-DATA ";

/// A path file format.
pub trait Format {
    fn name(&self) -> &'static str;

    /// Configuration for a new path in this format.
    fn build_path_config(&self) -> PathConfig;

    fn default_general_config(&self) -> GeneralConfig {
        GeneralConfig::default()
    }

    /// Reads the numeric data of a file written by the robot library.
    fn recover_path_file_data(&self, content: &str) -> Result<PathFileData, FormatError>;

    /// Writes `path` in this format, followed by the embedded editor data of
    /// the whole document.
    fn export_path_file(
        &self,
        store: &PathStore,
        gc: &GeneralConfig,
        path: Option<PathId>,
        sampler: &dyn PathSampler,
    ) -> Result<String, FormatError>;
}

/// Reads a path file, preferring its embedded editor data.
pub fn import_path_file(format: &dyn Format, content: &str) -> Result<PathFileData, FormatError> {
    let embedded = content
        .lines()
        .find_map(|line| line.strip_prefix(DATA_MARKER));
    match embedded {
        Some(json) => {
            tracing::debug!("Reading embedded path data");
            PathFileData::from_json(json)
        }
        None => {
            tracing::debug!("Recovering path data with {}", format.name());
            format.recover_path_file_data(content)
        }
    }
}
