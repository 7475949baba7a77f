use super::CancellableCommand;
use crate::model::{Control, ControlId, PathId, PathStore, PathTreeItem, SegmentId, SegmentVariant};
use pathkit_core::Vector;

/// Changes the degree of a segment, keeping its knots.
///
/// New handles mirror the neighbouring segment's handle about the shared
/// knot, or sit at the segment's midpoint when there is no neighbour. A
/// linear segment is left as is.
pub struct ConvertSegment {
    path: PathId,
    segment: SegmentId,
    target: SegmentVariant,
    previous_controls: Vec<ControlId>,
    new_controls: Vec<ControlId>,
    added: Vec<PathTreeItem>,
    removed: Vec<PathTreeItem>,
}

impl ConvertSegment {
    pub fn new(path: PathId, segment: SegmentId, target: SegmentVariant) -> Self {
        Self {
            path,
            segment,
            target,
            previous_controls: Vec::new(),
            new_controls: Vec::new(),
            added: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Handle positions next to the two knots.
    fn outer_handles(&self, store: &PathStore, index: usize) -> (Vector, Vector) {
        let segments = store.path(self.path).segments();
        let seg = store.segment(self.segment);
        let p0 = store.position(seg.first());
        let pn = store.position(seg.last());
        let midpoint = p0.midpoint(pn);

        let first = match index.checked_sub(1).map(|i| store.segment(segments[i])) {
            Some(prev) => p0.mirror(store.position(prev.controls()[prev.controls().len() - 2])),
            None => midpoint,
        };
        let last = match segments.get(index + 1).map(|s| store.segment(*s)) {
            Some(next) => pn.mirror(store.position(next.controls()[1])),
            None => midpoint,
        };
        (first, last)
    }
}

impl CancellableCommand for ConvertSegment {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let Some(index) = store.segment_index(self.path, self.segment) else {
            return false;
        };
        let seg = store.segment(self.segment);
        let from = seg.variant();
        if from == self.target || from == SegmentVariant::Linear {
            return false;
        }

        let (first, last) = (seg.first(), seg.last());
        self.previous_controls = seg.controls().to_vec();

        let interior: Vec<Vector> = match self.target {
            SegmentVariant::Linear => Vec::new(),
            SegmentVariant::Cubic => {
                let (p1, p2) = self.outer_handles(store, index);
                vec![p1, p2]
            }
            SegmentVariant::Quintic => {
                let (p1, p4) = self.outer_handles(store, index);
                let p0 = store.position(first);
                let p5 = store.position(last);
                vec![p1, (p0 * 2.0 + p5) / 3.0, (p0 + p5 * 2.0) / 3.0, p4]
            }
        };

        let mut controls = vec![first];
        controls.extend(interior.into_iter().map(|v| store.add_control(Control::at(v))));
        controls.push(last);

        self.added = controls[1..controls.len() - 1]
            .iter()
            .map(|c| PathTreeItem::Control(*c))
            .collect();
        self.removed = self.previous_controls[1..self.previous_controls.len() - 1]
            .iter()
            .map(|c| PathTreeItem::Control(*c))
            .collect();

        store.segment_mut(self.segment).controls = controls.clone();
        self.new_controls = controls;
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        store.segment_mut(self.segment).controls = self.previous_controls.clone();
    }

    fn redo(&mut self, store: &mut PathStore) {
        store.segment_mut(self.segment).controls = self.new_controls.clone();
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.added)
    }

    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.removed)
    }
}
