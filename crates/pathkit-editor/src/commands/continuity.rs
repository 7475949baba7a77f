//! C1/C2 continuity locking at a knot.

use super::CancellableCommand;
use crate::model::{Control, ControlId, PathId, PathStore, PathTreeItem, SegmentId};
use pathkit_core::Vector;

/// Order of continuity to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuity {
    /// Matching tangent.
    C1,
    /// Matching tangent and curvature.
    C2,
}

/// Moves the handles around a knot so the curve is C1 or C2 continuous
/// there, and locks the moved handles.
///
/// The knot must be shared by two segments of the path. A linear segment
/// after the knot adjusts its predecessor's handles instead, unless the
/// predecessor is linear too. Under C2 a cubic segment never adjusts after
/// a cubic predecessor.
pub struct LockControlContinuity {
    path: PathId,
    knot: ControlId,
    continuity: Continuity,
    changes: Vec<(ControlId, Control, Control)>,
    updated: Vec<PathTreeItem>,
}

impl LockControlContinuity {
    pub fn new(path: PathId, knot: ControlId, continuity: Continuity) -> Self {
        Self {
            path,
            knot,
            continuity,
            changes: Vec::new(),
            updated: Vec::new(),
        }
    }

    pub fn c1(path: PathId, knot: ControlId) -> Self {
        Self::new(path, knot, Continuity::C1)
    }

    pub fn c2(path: PathId, knot: ControlId) -> Self {
        Self::new(path, knot, Continuity::C2)
    }

    /// Segments before and after the knot.
    fn neighbours(&self, store: &PathStore) -> Option<(SegmentId, SegmentId)> {
        let segments = store.path(self.path).segments();
        let index = (1..segments.len()).find(|i| store.segment(segments[*i]).first() == self.knot)?;
        Some((segments[index - 1], segments[index]))
    }

    fn place(&mut self, store: &mut PathStore, id: ControlId, position: Vector) {
        let previous = store.control(id).clone();
        let control = store.control_mut(id);
        control.position = position;
        control.lock = true;
        let next = control.clone();
        self.changes.push((id, previous, next));
        self.updated.push(PathTreeItem::Control(id));
    }
}

impl CancellableCommand for LockControlContinuity {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let Some((last, segment)) = self.neighbours(store) else {
            return false;
        };
        let last_ids = store.segment(last).controls().to_vec();
        let seg_ids = store.segment(segment).controls().to_vec();
        let last_pts = store.segment_points(last);
        let seg_pts = store.segment_points(segment);
        let (n, m) = (last_pts.len(), seg_pts.len());
        let p0 = seg_pts[0];

        if m == 2 {
            if n == 2 {
                return false;
            }
            let v = seg_pts[1] - p0;
            let pn1 = p0 - v / (n - 1) as f64;
            self.place(store, last_ids[n - 2], pn1);
            if self.continuity == Continuity::C2 {
                self.place(store, last_ids[n - 3], pn1.mirror(p0));
            }
            return true;
        }

        if self.continuity == Continuity::C2 && m == 4 && n == 4 {
            return false;
        }
        let v = (p0 - last_pts[n - 2]) * (n - 1) as f64;
        let p1 = p0 + v / (m - 1) as f64;
        self.place(store, seg_ids[1], p1);
        if self.continuity == Continuity::C2 {
            self.place(store, seg_ids[2], p1 * 2.0 - p0);
        }
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        for (id, previous, _) in self.changes.iter().rev() {
            *store.control_mut(*id) = previous.clone();
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        for (id, _, next) in &self.changes {
            *store.control_mut(*id) = next.clone();
        }
    }

    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.updated)
    }
}
