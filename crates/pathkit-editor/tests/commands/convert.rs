use crate::support::{assert_close, build_path, controls_of, points_of, single_segment};
use pathkit_editor::commands::{CancellableCommand, ConvertSegment};
use pathkit_editor::model::{PathStore, PathTreeItem, SegmentVariant};

const QUINTIC: &[(f64, f64)] = &[
    (0.0, 0.0),
    (2.0, 4.0),
    (4.0, 6.0),
    (6.0, 6.0),
    (8.0, 4.0),
    (10.0, 0.0),
];

#[test]
fn test_quintic_to_linear_reports_removed_interior() {
    let mut store = PathStore::new();
    let (path, segment) = single_segment(&mut store, QUINTIC);
    let p = controls_of(&store, segment);

    let mut command = ConvertSegment::new(path, segment, SegmentVariant::Linear);
    assert!(command.execute(&mut store));

    assert_eq!(controls_of(&store, segment), vec![p[0], p[5]]);
    let removed: Vec<PathTreeItem> = p[1..5].iter().map(|c| PathTreeItem::Control(*c)).collect();
    assert_eq!(command.removed_items(), Some(removed.as_slice()));
    assert_eq!(command.added_items(), Some(&[] as &[PathTreeItem]));
}

#[test]
fn test_undo_restores_exact_controls() {
    let mut store = PathStore::new();
    let (path, segment) = single_segment(&mut store, QUINTIC);
    let original = controls_of(&store, segment);

    let mut command = ConvertSegment::new(path, segment, SegmentVariant::Cubic);
    assert!(command.execute(&mut store));
    let converted = controls_of(&store, segment);
    assert_eq!(converted.len(), 4);
    assert_eq!(command.added_items().map(|a| a.len()), Some(2));
    assert_eq!(command.removed_items().map(|r| r.len()), Some(4));

    command.undo(&mut store);
    assert_eq!(controls_of(&store, segment), original);
    command.redo(&mut store);
    assert_eq!(controls_of(&store, segment), converted);
}

#[test]
fn test_cubic_to_quintic_without_neighbours_uses_midpoint() {
    let mut store = PathStore::new();
    let (path, segment) = single_segment(
        &mut store,
        &[(0.0, 0.0), (0.0, 10.0), (30.0, 10.0), (30.0, 0.0)],
    );

    let mut command = ConvertSegment::new(path, segment, SegmentVariant::Quintic);
    assert!(command.execute(&mut store));

    let points = points_of(&store, segment);
    assert_eq!(points.len(), 6);
    assert_close(points[1], (15.0, 0.0));
    assert_close(points[2], (10.0, 0.0));
    assert_close(points[3], (20.0, 0.0));
    assert_close(points[4], (15.0, 0.0));
}

#[test]
fn test_conversion_mirrors_neighbour_handles() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[
            &[(-10.0, -10.0), (-5.0, -5.0), (-2.0, -1.0), (0.0, 0.0)],
            &[(0.0, 0.0), (1.0, 5.0), (5.0, 5.0), (6.0, 0.0), (8.0, -2.0), (10.0, 0.0)],
            &[(10.0, 0.0), (12.0, 3.0), (18.0, 3.0), (20.0, 0.0)],
        ],
    );
    let middle = segments[1];

    let mut command = ConvertSegment::new(path, middle, SegmentVariant::Cubic);
    assert!(command.execute(&mut store));

    let points = points_of(&store, middle);
    assert_close(points[1], (2.0, 1.0));
    assert_close(points[2], (8.0, -3.0));
    crate::support::assert_chained(&store, path);
}

#[test]
fn test_linear_source_and_same_variant_are_noops() {
    let mut store = PathStore::new();
    let (path, linear) = single_segment(&mut store, &[(0.0, 0.0), (10.0, 0.0)]);
    let mut command = ConvertSegment::new(path, linear, SegmentVariant::Cubic);
    assert!(!command.execute(&mut store));
    assert_eq!(controls_of(&store, linear).len(), 2);

    let (path, quintic) = single_segment(&mut store, QUINTIC);
    let mut command = ConvertSegment::new(path, quintic, SegmentVariant::Quintic);
    assert!(!command.execute(&mut store));
}
