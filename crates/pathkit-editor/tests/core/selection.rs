use crate::support::{build_path, controls_of};
use pathkit_editor::commands::{AddSegment, RemovePathsAndEndControls};
use pathkit_editor::history::{CommandHistory, DEFAULT_MERGE_TIMEOUT};
use pathkit_editor::model::{Control, PathStore, PathTreeItem};
use pathkit_editor::selection_manager::{EditorSelection, SelectionTracker};
use pathkit_editor::structure::traversal;

#[test]
fn test_selection_order_and_toggle() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[&[(0.0, 0.0), (1.0, 0.0)]]);
    let c = controls_of(&store, segments[0]);
    let mut selection = EditorSelection::new();

    assert!(selection.select(PathTreeItem::EndControl(c[1])));
    assert!(selection.select(PathTreeItem::Path(path)));
    assert!(!selection.select(PathTreeItem::EndControl(c[1])));
    assert_eq!(selection.primary(), Some(PathTreeItem::EndControl(c[1])));

    selection.toggle(PathTreeItem::EndControl(c[1]));
    assert_eq!(selection.selected(), vec![PathTreeItem::Path(path)]);
    selection.toggle(PathTreeItem::EndControl(c[0]));
    assert!(selection.is_selected(&PathTreeItem::EndControl(c[0])));

    selection.clear();
    assert!(selection.selected().is_empty());
}

#[test]
fn test_only_paths_expand() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[&[(0.0, 0.0), (1.0, 0.0)]]);
    let knot = PathTreeItem::EndControl(controls_of(&store, segments[0])[0]);
    let mut selection = EditorSelection::new();

    selection.expand(PathTreeItem::Path(path));
    selection.expand(knot);
    assert!(selection.is_expanded(&PathTreeItem::Path(path)));
    assert!(!selection.is_expanded(&knot));

    selection.remove_expanded(&PathTreeItem::Path(path));
    assert!(!selection.is_expanded(&PathTreeItem::Path(path)));
}

#[test]
fn test_set_selected_deduplicates() {
    let mut store = PathStore::new();
    let (path, _) = build_path(&mut store, &[&[(0.0, 0.0), (1.0, 0.0)]]);
    let mut selection = EditorSelection::new();
    let item = PathTreeItem::Path(path);

    selection.set_selected(&[item, item]);
    assert_eq!(selection.selected(), vec![item]);

    selection.set_hovered(Some(item));
    selection.clear_hover(&item);
    assert_eq!(selection.hovered(), None);
}

#[test]
fn test_removal_unlinks_and_undo_reselects() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[&[(0.0, 0.0), (1.0, 0.0)]]);
    let c = controls_of(&store, segments[0]);
    let path_item = PathTreeItem::Path(path);
    let all = traversal(&store, &[path]);

    let mut selection = EditorSelection::new();
    selection.select(path_item);
    selection.select(PathTreeItem::EndControl(c[1]));
    selection.expand(path_item);
    selection.set_hovered(Some(path_item));

    let mut history = CommandHistory::new(50);
    assert!(history.execute(
        &mut store,
        &mut selection,
        "Remove",
        Box::new(RemovePathsAndEndControls::new(vec![path_item])),
        DEFAULT_MERGE_TIMEOUT,
    ));

    assert!(store.paths().is_empty());
    assert!(selection.selected().is_empty());
    assert!(!selection.is_expanded(&path_item));
    assert_eq!(selection.hovered(), None);

    assert!(history.undo(&mut store, &mut selection));
    assert_eq!(store.paths(), &[path]);
    assert_eq!(selection.selected(), all);

    assert!(history.redo(&mut store, &mut selection));
    assert!(store.paths().is_empty());
    assert!(selection.selected().is_empty());
}

#[test]
fn test_added_items_selection_on_undo_redo() {
    let mut store = PathStore::new();
    let (path, segments) = build_path(&mut store, &[&[(0.0, 0.0), (10.0, 0.0)]]);
    let mut selection = EditorSelection::new();
    let mut history = CommandHistory::new(50);

    let command = AddSegment::linear(path, Control::end(20.0, 0.0, 0.0));
    assert!(history.execute(
        &mut store,
        &mut selection,
        "Add Segment",
        Box::new(command),
        DEFAULT_MERGE_TIMEOUT,
    ));
    let added_segment = store.path(path).segments()[1];
    let new_end = PathTreeItem::EndControl(store.segment(added_segment).last());
    assert_ne!(added_segment, segments[0]);

    selection.select(new_end);
    assert!(history.undo(&mut store, &mut selection));
    assert!(!selection.is_selected(&new_end));
    assert_eq!(store.path(path).segments(), segments.as_slice());

    assert!(history.redo(&mut store, &mut selection));
    assert_eq!(selection.selected(), vec![new_end]);
}
