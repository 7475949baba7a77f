//! Error handling for PathKit
//!
//! Provides error types for all layers of the path editor:
//! - Geometry errors (vector arithmetic)
//! - Model errors (segment/path construction, lookups)
//! - Format errors (path file import/export)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Commands never return these: a command that finds nothing to do reports
//! `false` from `execute` instead.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A component-wise division hit a zero divisor
    #[error("Division by zero component ({x}, {y})")]
    DivisionByZero {
        /// The divisor's x component.
        x: f64,
        /// The divisor's y component.
        y: f64,
    },
}

/// Model error type
///
/// Represents violations of the path data model invariants when building
/// segments and paths directly (import adapters, tests, scripting).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A segment was given a control count other than 2, 4 or 6
    #[error("Unsupported control count {count}, expected 2, 4 or 6")]
    UnsupportedControlCount {
        /// The number of controls supplied.
        count: usize,
    },

    /// The first or last control of a segment is not an end control
    #[error("Control {uid} must be an end control")]
    NotEndControl {
        /// The offending control's uid.
        uid: String,
    },

    /// An interior control of a segment is an end control
    #[error("Control {uid} must be an intermediate control")]
    NotIntermediateControl {
        /// The offending control's uid.
        uid: String,
    },

    /// Two consecutive segments do not meet at the same knot
    #[error("Knot mismatch: ({ax}, {ay}) does not match ({bx}, {by})")]
    KnotMismatch {
        /// Last control of the previous segment, x.
        ax: f64,
        /// Last control of the previous segment, y.
        ay: f64,
        /// First control of the next segment, x.
        bx: f64,
        /// First control of the next segment, y.
        by: f64,
    },

    /// No entity with the given uid exists
    #[error("Unknown uid: {uid}")]
    UnknownUid {
        /// The uid that was looked up.
        uid: String,
    },

    /// A path name contains forbidden characters
    #[error("Invalid path name: {name:?}")]
    InvalidPathName {
        /// The rejected name.
        name: String,
    },
}

/// Format error type
///
/// Represents errors from path file import and export. An import that
/// fails with one of these returns no partial path list.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The data section terminator is missing
    #[error("Invalid file format, unable to find line 'endData'")]
    MissingEndData,

    /// The max speed line is not a number
    #[error("Invalid file format, unable to parse max speed")]
    InvalidMaxSpeed,

    /// A segment line could not be parsed or does not chain
    #[error("Invalid file format, unable to parse segment at line {line_number}")]
    InvalidSegment {
        /// The 1-based line number of the bad segment.
        line_number: usize,
    },

    /// Export was requested without a path
    #[error("No path to export")]
    NoPath,

    /// Export was requested for a path without segments
    #[error("No segment to export")]
    NoSegment,

    /// The embedded editor data could not be read or written
    #[error("Path file data error: {0}")]
    Json(#[from] serde_json::Error),

    /// The embedded editor data is structurally inconsistent
    #[error("Path file data error: {0}")]
    Model(#[from] ModelError),
}

/// Main error type for PathKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a file format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is a model error
    pub fn is_model_error(&self) -> bool {
        matches!(self, Error::Model(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
