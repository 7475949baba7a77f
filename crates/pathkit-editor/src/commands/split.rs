use super::CancellableCommand;
use crate::model::{Control, ControlId, PathId, PathStore, PathTreeItem, SegmentId};

/// Splits a segment in two at a new end control.
///
/// The original segment keeps its first knot and its keyframes and now ends
/// at the split point. The new segment runs from the split point to the
/// original last knot and is inserted right after it.
pub struct SplitSegment {
    path: PathId,
    segment: SegmentId,
    point: Option<Control>,
    previous_controls: Vec<ControlId>,
    new_controls: Vec<ControlId>,
    new_segment: Option<SegmentId>,
    added: Vec<PathTreeItem>,
}

impl SplitSegment {
    pub fn new(path: PathId, segment: SegmentId, point: Control) -> Self {
        Self {
            path,
            segment,
            point: Some(point),
            previous_controls: Vec::new(),
            new_controls: Vec::new(),
            new_segment: None,
            added: Vec::new(),
        }
    }

    /// The second half created by the first execution.
    pub fn new_segment(&self) -> Option<SegmentId> {
        self.new_segment
    }
}

impl CancellableCommand for SplitSegment {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let Some(index) = store.segment_index(self.path, self.segment) else {
            return false;
        };
        let Some(point) = self.point.take() else {
            return false;
        };
        if !point.is_end() {
            tracing::warn!("Split point {} is not an end control", point.uid);
            return false;
        }

        let ids = store.segment(self.segment).controls().to_vec();
        let pts = store.segment_points(self.segment);
        let pv = point.position;
        let b = store.add_control(point);

        let (original, second, added) = match ids.len() {
            2 => (vec![ids[0], b], vec![b, ids[1]], vec![b]),
            4 => {
                let a = store.add_control(Control::at(pts[1].midpoint(pv)));
                let c = store.add_control(Control::at(pts[2].midpoint(pv)));
                (
                    vec![ids[0], ids[1], a, b],
                    vec![b, c, ids[2], ids[3]],
                    vec![a, b, c],
                )
            }
            _ => {
                let a1 = store.add_control(Control::at((pts[2] * 2.0 + pv) / 3.0));
                let a2 = store.add_control(Control::at((pts[2] + pv * 2.0) / 3.0));
                let c1 = store.add_control(Control::at((pv * 2.0 + pts[3]) / 3.0));
                let c2 = store.add_control(Control::at((pv + pts[3] * 2.0) / 3.0));
                (
                    vec![ids[0], ids[1], ids[2], a1, a2, b],
                    vec![b, c1, c2, ids[3], ids[4], ids[5]],
                    vec![a1, a2, b, c1, c2],
                )
            }
        };

        let new_segment = match store.create_segment(second) {
            Ok(id) => id,
            Err(err) => {
                tracing::error!("Failed to split segment: {}", err);
                return false;
            }
        };
        store.segment_mut(self.segment).controls = original.clone();
        store.path_mut(self.path).segments.insert(index + 1, new_segment);

        self.previous_controls = ids;
        self.new_controls = original;
        self.new_segment = Some(new_segment);
        self.added = added.into_iter().map(|c| store.item(c)).collect();
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        store.segment_mut(self.segment).controls = self.previous_controls.clone();
        let segments = &mut store.path_mut(self.path).segments;
        if let Some(pos) = segments.iter().position(|s| Some(*s) == self.new_segment) {
            segments.remove(pos);
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        let (Some(index), Some(new_segment)) = (
            store.segment_index(self.path, self.segment),
            self.new_segment,
        ) else {
            return;
        };
        store.segment_mut(self.segment).controls = self.new_controls.clone();
        store.path_mut(self.path).segments.insert(index + 1, new_segment);
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.added)
    }
}
