use crate::support::{controls_of, single_segment};
use pathkit_core::Vector;
use pathkit_editor::commands::{CancellableCommand, DragControls};
use pathkit_editor::model::{PathStore, PathTreeItem};

#[test]
fn test_drag_moves_followers_by_offset() {
    let mut store = PathStore::new();
    let (_, segment) = single_segment(
        &mut store,
        &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
    );
    let c = controls_of(&store, segment);

    let mut command = DragControls::new(
        c[3],
        Vector::new(10.0, 0.0),
        Vector::new(12.0, 1.0),
        vec![c[2]],
    );
    assert!(command.execute(&mut store));
    assert_eq!(store.position(c[3]), Vector::new(12.0, 1.0));
    assert_eq!(store.position(c[2]), Vector::new(12.0, 11.0));
    assert_eq!(
        command.updated_items(),
        Some(&[PathTreeItem::EndControl(c[3]), PathTreeItem::Control(c[2])][..])
    );

    command.undo(&mut store);
    assert_eq!(store.position(c[3]), Vector::new(10.0, 0.0));
    assert_eq!(store.position(c[2]), Vector::new(10.0, 10.0));
}

#[test]
fn test_drag_merge_requires_same_controls() {
    let mut store = PathStore::new();
    let (_, segment) = single_segment(
        &mut store,
        &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
    );
    let c = controls_of(&store, segment);

    let mut first = DragControls::new(c[3], Vector::new(10.0, 0.0), Vector::new(11.0, 0.0), vec![]);
    assert!(first.execute(&mut store));
    let mut second = DragControls::new(c[3], Vector::new(11.0, 0.0), Vector::new(15.0, 0.0), vec![]);
    assert!(second.execute(&mut store));
    let other = DragControls::new(c[3], Vector::new(15.0, 0.0), Vector::new(16.0, 0.0), vec![c[2]]);

    let mergeable = first.as_mergeable().unwrap();
    assert!(!mergeable.merge(&other));
    assert!(mergeable.merge(&second));

    first.undo(&mut store);
    assert_eq!(store.position(c[3]), Vector::new(10.0, 0.0));
    first.redo(&mut store);
    assert_eq!(store.position(c[3]), Vector::new(15.0, 0.0));
}

#[test]
fn test_drag_without_followers_moves_main_control() {
    let mut store = PathStore::new();
    let (_, segment) = single_segment(&mut store, &[(0.0, 0.0), (10.0, 0.0)]);
    let c = controls_of(&store, segment);

    let mut command = DragControls::new(
        c[1],
        Vector::new(10.0, 0.0),
        Vector::new(10.0, 4.0),
        Vec::new(),
    );
    assert!(command.execute(&mut store));
    assert_eq!(store.position(c[1]), Vector::new(10.0, 4.0));
    assert_eq!(store.position(c[0]), Vector::new(0.0, 0.0));
    assert_eq!(command.updated_items(), Some(&[PathTreeItem::EndControl(c[1])][..]));

    command.undo(&mut store);
    assert_eq!(store.position(c[1]), Vector::new(10.0, 0.0));
}
