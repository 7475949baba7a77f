use crate::support::{assert_close, build_path, controls_of, points_of};
use pathkit_editor::commands::{CancellableCommand, LockControlContinuity};
use pathkit_editor::model::{PathStore, PathTreeItem};

const CUBIC: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 5.0), (5.0, 10.0), (10.0, 10.0)];
const CUBIC_NEXT: &[(f64, f64)] = &[(10.0, 10.0), (12.0, 20.0), (20.0, 20.0), (20.0, 10.0)];

#[test]
fn test_c1_cubic_after_cubic() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[CUBIC, CUBIC_NEXT],
    );
    let next = controls_of(&store, segments[1]);

    let mut command = LockControlContinuity::c1(path, next[0]);
    assert!(command.execute(&mut store));

    let moved = store.control(next[1]);
    assert_close((moved.x(), moved.y()), (15.0, 10.0));
    assert!(moved.lock);
    assert_eq!(
        command.updated_items(),
        Some(&[PathTreeItem::Control(next[1])][..])
    );

    command.undo(&mut store);
    let restored = store.control(next[1]);
    assert_close((restored.x(), restored.y()), (12.0, 20.0));
    assert!(!restored.lock);

    command.redo(&mut store);
    assert!(store.control(next[1]).lock);
}

#[test]
fn test_c2_quintic_after_cubic() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[
            CUBIC,
            &[(10.0, 10.0), (11.0, 11.0), (12.0, 12.0), (13.0, 13.0), (14.0, 14.0), (20.0, 10.0)],
        ],
    );
    let next = controls_of(&store, segments[1]);
    let uid = store.control(next[1]).uid.clone();

    let mut command = LockControlContinuity::c2(path, next[0]);
    assert!(command.execute(&mut store));

    let p1 = store.control(next[1]);
    let p2 = store.control(next[2]);
    assert_close((p1.x(), p1.y()), (13.0, 10.0));
    assert_close((p2.x(), p2.y()), (16.0, 10.0));
    assert!(p1.lock && p2.lock);
    // moved in place, identity kept
    assert_eq!(p1.uid, uid);
}

#[test]
fn test_c2_cubic_after_quintic_moves_only_segment_handles() {
    let mut store = PathStore::new();
    let quintic: &[(f64, f64)] =
        &[(0.0, 0.0), (2.0, 2.0), (4.0, 4.0), (6.0, 6.0), (9.0, 10.0), (10.0, 10.0)];
    let (path, segments) = build_path(&mut store, &[quintic, CUBIC_NEXT]);
    let prev = controls_of(&store, segments[0]);
    let next = controls_of(&store, segments[1]);

    let mut command = LockControlContinuity::c2(path, next[0]);
    assert!(command.execute(&mut store));

    // tangent (10 - 9) * 5, spread over the cubic's 3 spans
    let p1 = store.control(next[1]);
    let p2 = store.control(next[2]);
    assert_close((p1.x(), p1.y()), (10.0 + 5.0 / 3.0, 10.0));
    assert_close((p2.x(), p2.y()), (10.0 + 10.0 / 3.0, 10.0));
    assert!(p1.lock && p2.lock);

    assert_eq!(points_of(&store, segments[0]), quintic.to_vec());
    assert!(prev.iter().all(|c| !store.control(*c).lock));
    assert_eq!(
        command.updated_items(),
        Some(&[PathTreeItem::Control(next[1]), PathTreeItem::Control(next[2])][..])
    );

    command.undo(&mut store);
    assert_eq!(points_of(&store, segments[1]), CUBIC_NEXT.to_vec());
    assert!(!store.control(next[1]).lock && !store.control(next[2]).lock);
}

#[test]
fn test_c2_cubic_after_cubic_is_noop() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[CUBIC, CUBIC_NEXT],
    );
    let knot = store.segment(segments[1]).first();

    let mut command = LockControlContinuity::c2(path, knot);
    assert!(!command.execute(&mut store));
}

#[test]
fn test_linear_after_cubic_adjusts_predecessor() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[CUBIC, &[(10.0, 10.0), (20.0, 10.0)]]);
    let prev = controls_of(&store, segments[0]);

    let mut command = LockControlContinuity::c2(path, prev[3]);
    assert!(command.execute(&mut store));

    let p2 = store.control(prev[2]);
    let p1 = store.control(prev[1]);
    assert_close((p2.x(), p2.y()), (10.0 - 10.0 / 3.0, 10.0));
    assert_close((p1.x(), p1.y()), (10.0 - 20.0 / 3.0, 10.0));
    assert_eq!(
        command.updated_items(),
        Some(&[PathTreeItem::Control(prev[2]), PathTreeItem::Control(prev[1])][..])
    );
}

#[test]
fn test_linear_after_linear_is_noop() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(
        &mut store,
        &[&[(0.0, 0.0), (10.0, 0.0)], &[(10.0, 0.0), (20.0, 5.0)]],
    );
    let knot = store.segment(segments[1]).first();
    assert!(!LockControlContinuity::c1(path, knot).execute(&mut store));
}

#[test]
fn test_unshared_knot_is_noop() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[CUBIC, CUBIC_NEXT]);
    let first = store.segment(segments[0]).first();
    let last = store.segment(segments[1]).last();

    assert!(!LockControlContinuity::c1(path, first).execute(&mut store));
    assert!(!LockControlContinuity::c1(path, last).execute(&mut store));
}
