//! Speed and bent-rate keyframes.

use super::{make_uid, SegmentId};
use serde::{Deserialize, Serialize};

/// A keyframe on a segment.
///
/// `x_pos` is the position along the segment in `[0, 1)`, `y_pos` the
/// normalized value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub uid: String,
    pub x_pos: f64,
    pub y_pos: f64,
}

impl Keyframe {
    pub fn new(x_pos: f64, y_pos: f64) -> Self {
        Self {
            uid: make_uid(),
            x_pos,
            y_pos,
        }
    }
}

/// Which keyframe list of a segment a keyframe command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKeyframeKey {
    Speed,
    BentRate,
}

/// Where a keyframe sits: segment plus position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframePos {
    pub segment: SegmentId,
    pub x_pos: f64,
    pub y_pos: f64,
}

/// Keyframes of one segment, kept sorted by `x_pos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeList {
    items: Vec<Keyframe>,
}

impl KeyframeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(mut items: Vec<Keyframe>) -> Self {
        items.sort_by(|a, b| a.x_pos.total_cmp(&b.x_pos));
        Self { items }
    }

    /// Inserts after any keyframe with an equal position.
    pub fn add(&mut self, keyframe: Keyframe) {
        let idx = self
            .items
            .partition_point(|k| k.x_pos <= keyframe.x_pos);
        self.items.insert(idx, keyframe);
    }

    pub fn remove(&mut self, uid: &str) -> Option<Keyframe> {
        let idx = self.items.iter().position(|k| k.uid == uid)?;
        Some(self.items.remove(idx))
    }

    pub fn get(&self, uid: &str) -> Option<&Keyframe> {
        self.items.iter().find(|k| k.uid == uid)
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.get(uid).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Keyframe] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
