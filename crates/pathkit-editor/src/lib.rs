//! # PathKit Editor
//!
//! Path editing engine for robot motion paths built from linear, cubic and
//! quintic Bezier segments.
//!
//! ## Architecture
//!
//! - [`model`]: arena of controls, segments and paths with shared knots
//! - [`structure`]: conversion between paths and the flattened path tree
//! - [`commands`]: undoable edits, some of which merge
//! - [`history`]: undo/redo stacks, merging and history events
//! - [`format`]: import and export of robot library path files
//! - [`editor_state`]: a document with its history and selection

pub mod commands;
pub mod editor_state;
pub mod format;
pub mod history;
pub mod model;
pub mod sampling;
pub mod selection_manager;
pub mod serialization;
pub mod structure;

pub use commands::{CancellableCommand, MergeableCommand};
pub use editor_state::EditorState;
pub use history::CommandHistory;
pub use model::{
    Control, ControlId, GeneralConfig, PathConfig, PathId, PathStore, PathTreeItem, SegmentId,
    SegmentVariant,
};
pub use selection_manager::{EditorSelection, SelectionTracker};
pub use serialization::PathFileData;
