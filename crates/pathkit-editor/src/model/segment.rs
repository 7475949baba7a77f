use super::{make_uid, ControlId, KeyframeList, SegmentKeyframeKey};

/// Index of a segment in the [`PathStore`](super::PathStore) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Segment kind, determined by its control count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentVariant {
    Linear,
    Cubic,
    Quintic,
}

impl SegmentVariant {
    pub fn from_control_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Linear),
            4 => Some(Self::Cubic),
            6 => Some(Self::Quintic),
            _ => None,
        }
    }

    pub fn control_count(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Cubic => 4,
            Self::Quintic => 6,
        }
    }
}

/// A Bezier segment.
///
/// `controls` always holds 2, 4 or 6 ids; the first and last are end
/// controls. The list is only changed through the store and commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub uid: String,
    pub(crate) controls: Vec<ControlId>,
    pub speed_keyframes: KeyframeList,
    pub bent_rate_keyframes: KeyframeList,
}

impl Segment {
    pub(crate) fn new(controls: Vec<ControlId>) -> Self {
        Self {
            uid: make_uid(),
            controls,
            speed_keyframes: KeyframeList::new(),
            bent_rate_keyframes: KeyframeList::new(),
        }
    }

    pub fn controls(&self) -> &[ControlId] {
        &self.controls
    }

    pub fn first(&self) -> ControlId {
        self.controls[0]
    }

    pub fn last(&self) -> ControlId {
        self.controls[self.controls.len() - 1]
    }

    /// Interior controls, empty for a linear segment.
    pub fn interior(&self) -> &[ControlId] {
        &self.controls[1..self.controls.len() - 1]
    }

    pub fn variant(&self) -> SegmentVariant {
        SegmentVariant::from_control_count(self.controls.len()).unwrap_or(SegmentVariant::Linear)
    }

    pub fn is_linear(&self) -> bool {
        self.controls.len() == 2
    }

    pub fn is_cubic(&self) -> bool {
        self.controls.len() == 4
    }

    pub fn is_quintic(&self) -> bool {
        self.controls.len() == 6
    }

    pub fn keyframes(&self, key: SegmentKeyframeKey) -> &KeyframeList {
        match key {
            SegmentKeyframeKey::Speed => &self.speed_keyframes,
            SegmentKeyframeKey::BentRate => &self.bent_rate_keyframes,
        }
    }

    pub fn keyframes_mut(&mut self, key: SegmentKeyframeKey) -> &mut KeyframeList {
        match key {
            SegmentKeyframeKey::Speed => &mut self.speed_keyframes,
            SegmentKeyframeKey::BentRate => &mut self.bent_rate_keyframes,
        }
    }
}
