use super::{make_uid, PathConfig, SegmentId};
use pathkit_core::ModelError;
use regex::Regex;
use std::sync::OnceLock;

/// Index of a path in the [`PathStore`](super::PathStore) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(pub(crate) usize);

impl PathId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named chain of segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub uid: String,
    pub name: String,
    pub visible: bool,
    pub lock: bool,
    pub pc: PathConfig,
    pub(crate) segments: Vec<SegmentId>,
}

fn name_pattern() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| Regex::new(r"^[^<>\r\n]+$").expect("invalid regex pattern"))
}

impl Path {
    pub(crate) fn new(pc: PathConfig, segments: Vec<SegmentId>) -> Self {
        Self {
            uid: make_uid(),
            name: "Path".to_string(),
            visible: true,
            lock: false,
            pc,
            segments,
        }
    }

    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    pub fn first_segment(&self) -> Option<SegmentId> {
        self.segments.first().copied()
    }

    pub fn last_segment(&self) -> Option<SegmentId> {
        self.segments.last().copied()
    }

    /// Path names contain no angle brackets or newlines. The empty name is
    /// allowed.
    pub fn is_valid_name(name: &str) -> bool {
        name.is_empty() || name_pattern().is_match(name)
    }

    pub fn check_name(name: &str) -> Result<(), ModelError> {
        if Self::is_valid_name(name) {
            Ok(())
        } else {
            Err(ModelError::InvalidPathName {
                name: name.to_string(),
            })
        }
    }
}
