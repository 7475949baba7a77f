//! Path data model
//!
//! Controls, segments and paths live in a [`PathStore`] arena and refer to
//! each other by id. Two consecutive segments of a path share their knot:
//! the same [`ControlId`] is the last control of one and the first of the
//! next, so moving it moves both.

pub mod config;
pub mod control;
pub mod keyframe;
pub mod path;
pub mod segment;
pub mod store;
pub mod tree_item;

pub use config::{GeneralConfig, NumberRange, PathConfig};
pub use control::{Control, ControlId, ControlKind};
pub use keyframe::{Keyframe, KeyframeList, KeyframePos, SegmentKeyframeKey};
pub use path::{Path, PathId};
pub use segment::{Segment, SegmentId, SegmentVariant};
pub use store::PathStore;
pub use tree_item::PathTreeItem;

use uuid::Uuid;

/// Generates a fresh entity uid.
pub fn make_uid() -> String {
    Uuid::new_v4().simple().to_string()
}
