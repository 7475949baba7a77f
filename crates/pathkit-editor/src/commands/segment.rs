//! Appending segments to a path.

use super::CancellableCommand;
use crate::model::{
    Control, ControlId, PathId, PathStore, PathTreeItem, SegmentId, SegmentVariant,
};
use pathkit_core::Vector;

/// Appends a linear, cubic or quintic segment ending at a new end control.
///
/// On an empty path the segment starts at the origin and its handles form
/// an S-curve between the two knots. Otherwise it starts at the path's last
/// knot and its first handles continue the tangent (and, for quintic, the
/// acceleration) of the previous segment.
pub struct AddSegment {
    path: PathId,
    end: Option<Control>,
    variant: SegmentVariant,
    segment: Option<SegmentId>,
    added: Vec<PathTreeItem>,
}

impl AddSegment {
    pub fn new(path: PathId, end: Control, variant: SegmentVariant) -> Self {
        Self {
            path,
            end: Some(end),
            variant,
            segment: None,
            added: Vec::new(),
        }
    }

    pub fn linear(path: PathId, end: Control) -> Self {
        Self::new(path, end, SegmentVariant::Linear)
    }

    pub fn cubic(path: PathId, end: Control) -> Self {
        Self::new(path, end, SegmentVariant::Cubic)
    }

    pub fn quintic(path: PathId, end: Control) -> Self {
        Self::new(path, end, SegmentVariant::Quintic)
    }

    /// The segment created by the first execution.
    pub fn segment(&self) -> Option<SegmentId> {
        self.segment
    }

    fn handles(&self, store: &PathStore, p0: Vector, end: Vector) -> Vec<Vector> {
        let last = store.path(self.path).last_segment();
        match (self.variant, last) {
            (SegmentVariant::Linear, _) => Vec::new(),
            (SegmentVariant::Cubic, None) => {
                vec![Vector::new(p0.x, end.y), Vector::new(end.x, p0.y)]
            }
            (SegmentVariant::Quintic, None) => {
                let p2 = end / 3.0;
                vec![
                    Vector::new(p0.x, end.y),
                    p2,
                    p2 * 2.0,
                    Vector::new(end.x, p0.y),
                ]
            }
            (SegmentVariant::Cubic, Some(last)) => {
                let v = outgoing_tangent(&store.segment_points(last));
                vec![p0 + v / 3.0, p0.midpoint(end)]
            }
            (SegmentVariant::Quintic, Some(last)) => {
                let points = store.segment_points(last);
                let v = outgoing_tangent(&points);
                let n = points.len();
                let a = match n {
                    4 => (p0 - points[n - 2] * 2.0 + points[n - 3]) * 6.0,
                    6 => (p0 - points[n - 2] * 2.0 + points[n - 3]) * 10.0,
                    _ => Vector::ZERO,
                };
                let p1 = p0 + v / 5.0;
                vec![
                    p1,
                    a / 10.0 + p1 * 2.0 - p0,
                    (p0 * 2.0 + end) / 3.0,
                    (p0 + end * 2.0) / 3.0,
                ]
            }
        }
    }
}

/// Derivative at the end of a Bezier segment given its control points.
pub(crate) fn outgoing_tangent(points: &[Vector]) -> Vector {
    let n = points.len();
    (points[n - 1] - points[n - 2]) * (n - 1) as f64
}

impl CancellableCommand for AddSegment {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let Some(end) = self.end.take() else {
            return false;
        };
        if !end.is_end() {
            tracing::warn!("Segment end {} is not an end control", end.uid);
            return false;
        }

        let start: Option<ControlId> = store
            .path(self.path)
            .last_segment()
            .map(|s| store.segment(s).last());
        let (first, is_new_start) = match start {
            Some(id) => (id, false),
            None => (store.add_control(Control::end(0.0, 0.0, 0.0)), true),
        };
        let p0 = store.position(first);
        let handles = self.handles(store, p0, end.position);

        let mut controls = vec![first];
        controls.extend(handles.into_iter().map(|h| store.add_control(Control::at(h))));
        controls.push(store.add_control(end));

        let segment = match store.create_segment(controls) {
            Ok(id) => id,
            Err(err) => {
                tracing::error!("Failed to add segment: {}", err);
                return false;
            }
        };
        store.path_mut(self.path).segments.push(segment);

        let skip = if is_new_start { 0 } else { 1 };
        self.added = store.segment(segment).controls()[skip..]
            .iter()
            .map(|c| store.item(*c))
            .collect();
        self.segment = Some(segment);
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        if let Some(segment) = self.segment {
            let segments = &mut store.path_mut(self.path).segments;
            if segments.last() == Some(&segment) {
                segments.pop();
            }
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        if let Some(segment) = self.segment {
            store.path_mut(self.path).segments.push(segment);
        }
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.added)
    }
}
