//! Serializable snapshot of a document
//!
//! [`PathFileData`] is the format-independent representation exchanged with
//! importers and exporters. Shared knots are written once per segment and
//! relinked on load by uid: the first control of a segment with the same uid
//! as the last control of the previous segment becomes the same control.

use crate::model::{
    Control, ControlId, ControlKind, GeneralConfig, Keyframe, KeyframeList, PathConfig, PathId,
    PathStore,
};
use chrono::{DateTime, Utc};
use pathkit_core::{FormatError, ModelError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlData {
    pub uid: String,
    pub x: f64,
    pub y: f64,
    /// Present for end controls only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub lock: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    pub uid: String,
    pub controls: Vec<ControlData>,
    #[serde(default)]
    pub speed_keyframes: Vec<Keyframe>,
    #[serde(default)]
    pub bent_rate_keyframes: Vec<Keyframe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub uid: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub lock: bool,
    pub pc: PathConfig,
    pub segments: Vec<SegmentData>,
}

/// Everything needed to rebuild a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFileData {
    pub app_version: String,
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
    pub general_config: GeneralConfig,
    pub paths: Vec<PathData>,
}

impl ControlData {
    fn from_control(control: &Control) -> Self {
        Self {
            uid: control.uid.clone(),
            x: control.x(),
            y: control.y(),
            heading: control.heading(),
            visible: control.visible,
            lock: control.lock,
        }
    }

    fn to_control(&self) -> Control {
        Control {
            uid: self.uid.clone(),
            position: (self.x, self.y).into(),
            visible: self.visible,
            lock: self.lock,
            kind: match self.heading {
                Some(heading) => ControlKind::End { heading },
                None => ControlKind::Intermediate,
            },
        }
    }
}

impl PathFileData {
    /// Captures the paths of a document in order.
    pub fn from_store(store: &PathStore, general_config: &GeneralConfig) -> Self {
        let paths = store
            .paths()
            .iter()
            .map(|id| path_data(store, *id))
            .collect();
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            modified: Utc::now(),
            general_config: general_config.clone(),
            paths,
        }
    }

    /// Builds a new store holding the paths of this snapshot.
    pub fn build_store(&self) -> Result<PathStore, ModelError> {
        let mut store = PathStore::new();
        for data in &self.paths {
            let mut segments = Vec::with_capacity(data.segments.len());
            let mut knot: Option<(String, ControlId)> = None;
            for seg in &data.segments {
                let mut ids = Vec::with_capacity(seg.controls.len());
                for (i, control) in seg.controls.iter().enumerate() {
                    let shared = match &knot {
                        Some((uid, id)) if i == 0 && *uid == control.uid => Some(*id),
                        _ => None,
                    };
                    ids.push(shared.unwrap_or_else(|| store.add_control(control.to_control())));
                }
                let id = store.create_segment(ids)?;
                let segment = store.segment_mut(id);
                segment.uid = seg.uid.clone();
                segment.speed_keyframes = KeyframeList::from_vec(seg.speed_keyframes.clone());
                segment.bent_rate_keyframes = KeyframeList::from_vec(seg.bent_rate_keyframes.clone());
                let last = segment.last();
                knot = Some((store.control(last).uid.clone(), last));
                segments.push(id);
            }

            let path = store.add_path(data.pc, segments)?;
            let path = store.path_mut(path);
            path.uid = data.uid.clone();
            path.name = data.name.clone();
            path.visible = data.visible;
            path.lock = data.lock;
        }
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(content)?)
    }
}

fn path_data(store: &PathStore, id: PathId) -> PathData {
    let path = store.path(id);
    let segments = path
        .segments()
        .iter()
        .map(|s| {
            let segment = store.segment(*s);
            SegmentData {
                uid: segment.uid.clone(),
                controls: segment
                    .controls()
                    .iter()
                    .map(|c| ControlData::from_control(store.control(*c)))
                    .collect(),
                speed_keyframes: segment.speed_keyframes.as_slice().to_vec(),
                bent_rate_keyframes: segment.bent_rate_keyframes.as_slice().to_vec(),
            }
        })
        .collect();
    PathData {
        uid: path.uid.clone(),
        name: path.name.clone(),
        visible: path.visible,
        lock: path.lock,
        pc: path.pc,
        segments,
    }
}
