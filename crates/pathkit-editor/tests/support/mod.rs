#![allow(dead_code)]

use pathkit_editor::model::{
    Control, ControlId, PathConfig, PathId, PathStore, PathTreeItem, SegmentId,
};

/// Builds a path from per-segment point lists. Each list holds the first
/// knot, the handles and the last knot; the first knot of every segment
/// after the first is the previous segment's last knot.
pub fn build_path(store: &mut PathStore, segments: &[&[(f64, f64)]]) -> (PathId, Vec<SegmentId>) {
    let mut ids = Vec::new();
    let mut knot: Option<ControlId> = None;
    for points in segments {
        let last = points.len() - 1;
        let mut controls = Vec::with_capacity(points.len());
        for (i, (x, y)) in points.iter().enumerate() {
            let id = match (i, knot) {
                (0, Some(shared)) => shared,
                (0, None) => store.add_control(Control::end(*x, *y, 0.0)),
                (i, _) if i == last => store.add_control(Control::end(*x, *y, 0.0)),
                _ => store.add_control(Control::new(*x, *y)),
            };
            controls.push(id);
        }
        knot = controls.last().copied();
        ids.push(store.create_segment(controls).unwrap());
    }
    let path = store.add_path(PathConfig::default(), ids.clone()).unwrap();
    (path, ids)
}

/// A path with one segment through the given points.
pub fn single_segment(store: &mut PathStore, points: &[(f64, f64)]) -> (PathId, SegmentId) {
    let (path, segments) = build_path(store, &[points]);
    (path, segments[0])
}

pub fn controls_of(store: &PathStore, segment: SegmentId) -> Vec<ControlId> {
    store.segment(segment).controls().to_vec()
}

pub fn points_of(store: &PathStore, segment: SegmentId) -> Vec<(f64, f64)> {
    store
        .segment_points(segment)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

pub fn items(store: &PathStore, ids: &[ControlId]) -> Vec<PathTreeItem> {
    ids.iter().map(|c| store.item(*c)).collect()
}

pub fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Every pair of consecutive segments shares the same knot control.
pub fn assert_chained(store: &PathStore, path: PathId) {
    for pair in store.path(path).segments().windows(2) {
        assert_eq!(store.segment(pair[0]).last(), store.segment(pair[1]).first());
    }
}
