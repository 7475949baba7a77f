//! Keyframe commands.

use super::{downcast, CancellableCommand, MergeableCommand};
use crate::model::{Keyframe, KeyframePos, PathStore, SegmentId, SegmentKeyframeKey};

/// Adds a keyframe to a segment.
pub struct AddKeyframe {
    segment: SegmentId,
    key: SegmentKeyframeKey,
    keyframe: Keyframe,
}

impl AddKeyframe {
    pub fn new(segment: SegmentId, key: SegmentKeyframeKey, keyframe: Keyframe) -> Self {
        Self {
            segment,
            key,
            keyframe,
        }
    }
}

impl CancellableCommand for AddKeyframe {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        store
            .segment_mut(self.segment)
            .keyframes_mut(self.key)
            .add(self.keyframe.clone());
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        store
            .segment_mut(self.segment)
            .keyframes_mut(self.key)
            .remove(&self.keyframe.uid);
    }

    fn redo(&mut self, store: &mut PathStore) {
        self.execute(store);
    }
}

/// Takes a keyframe out of whichever of `segments` holds it.
fn take_keyframe(
    store: &mut PathStore,
    segments: &[SegmentId],
    key: SegmentKeyframeKey,
    uid: &str,
) -> Option<(SegmentId, Keyframe)> {
    segments.iter().find_map(|segment| {
        store
            .segment_mut(*segment)
            .keyframes_mut(key)
            .remove(uid)
            .map(|kf| (*segment, kf))
    })
}

/// Moves a keyframe to a new position, possibly on another segment.
///
/// Consecutive moves of the same keyframe merge.
pub struct MoveKeyframe {
    segments: Vec<SegmentId>,
    key: SegmentKeyframeKey,
    new_pos: KeyframePos,
    uid: String,
    old_pos: Option<KeyframePos>,
}

impl MoveKeyframe {
    /// `segments` are searched in order for the keyframe with `uid`.
    pub fn new(
        segments: Vec<SegmentId>,
        key: SegmentKeyframeKey,
        new_pos: KeyframePos,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            segments,
            key,
            new_pos,
            uid: uid.into(),
            old_pos: None,
        }
    }

    pub fn old_pos(&self) -> Option<KeyframePos> {
        self.old_pos
    }

    fn place(&self, store: &mut PathStore, pos: KeyframePos) {
        store
            .segment_mut(pos.segment)
            .keyframes_mut(self.key)
            .add(Keyframe {
                uid: self.uid.clone(),
                x_pos: pos.x_pos,
                y_pos: pos.y_pos,
            });
    }

    fn lift(&self, store: &mut PathStore, pos: KeyframePos) {
        store
            .segment_mut(pos.segment)
            .keyframes_mut(self.key)
            .remove(&self.uid);
    }
}

impl CancellableCommand for MoveKeyframe {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let Some((segment, old)) = take_keyframe(store, &self.segments, self.key, &self.uid) else {
            return false;
        };
        self.old_pos = Some(KeyframePos {
            segment,
            x_pos: old.x_pos,
            y_pos: old.y_pos,
        });
        self.place(store, self.new_pos);
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        if let Some(old) = self.old_pos {
            self.lift(store, self.new_pos);
            self.place(store, old);
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        if let Some(old) = self.old_pos {
            self.lift(store, old);
            self.place(store, self.new_pos);
        }
    }

    fn as_mergeable(&mut self) -> Option<&mut dyn MergeableCommand> {
        Some(self)
    }
}

impl MergeableCommand for MoveKeyframe {
    fn merge(&mut self, latest: &dyn CancellableCommand) -> bool {
        let Some(latest) = downcast::<MoveKeyframe>(latest) else {
            return false;
        };
        if latest.uid != self.uid || latest.key != self.key {
            return false;
        }
        self.new_pos = latest.new_pos;
        true
    }
}

/// Removes a keyframe from whichever of `segments` holds it.
pub struct RemoveKeyframe {
    segments: Vec<SegmentId>,
    key: SegmentKeyframeKey,
    uid: String,
    removed: Option<(SegmentId, Keyframe)>,
}

impl RemoveKeyframe {
    pub fn new(segments: Vec<SegmentId>, key: SegmentKeyframeKey, uid: impl Into<String>) -> Self {
        Self {
            segments,
            key,
            uid: uid.into(),
            removed: None,
        }
    }

    /// The segment the keyframe was removed from.
    pub fn segment(&self) -> Option<SegmentId> {
        self.removed.as_ref().map(|(segment, _)| *segment)
    }
}

impl CancellableCommand for RemoveKeyframe {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        self.removed = take_keyframe(store, &self.segments, self.key, &self.uid);
        self.removed.is_some()
    }

    fn undo(&mut self, store: &mut PathStore) {
        if let Some((segment, keyframe)) = &self.removed {
            store
                .segment_mut(*segment)
                .keyframes_mut(self.key)
                .add(keyframe.clone());
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        if let Some((segment, keyframe)) = &self.removed {
            store
                .segment_mut(*segment)
                .keyframes_mut(self.key)
                .remove(&keyframe.uid);
        }
    }
}
