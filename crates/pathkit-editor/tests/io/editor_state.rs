use pathkit_editor::commands::{AddPath, AddSegment};
use pathkit_editor::model::{Control, PathId, PathTreeItem};
use pathkit_editor::EditorState;
use pathkit_settings::Preferences;
use std::time::Duration;

fn add_path(state: &mut EditorState, end: (f64, f64)) -> PathId {
    let pc = state.new_path_config();
    let path = state.store.create_path(pc, Vec::new()).unwrap();
    assert!(state.execute("Add Path", AddPath::new(path)));
    assert!(state.execute(
        "Add Segment",
        AddSegment::cubic(path, Control::end(end.0, end.1, 0.0))
    ));
    path
}

#[test]
fn test_execute_undo_redo() {
    let mut state = EditorState::default();
    let path = add_path(&mut state, (30.0, 10.0));
    assert_eq!(state.store.path(path).segments().len(), 1);

    assert!(state.undo());
    assert!(state.store.path(path).segments().is_empty());
    assert!(state.undo());
    assert!(state.store.paths().is_empty());
    assert!(!state.undo());

    assert!(state.redo());
    assert!(state.redo());
    assert_eq!(state.store.paths(), &[path]);
    assert_eq!(state.store.path(path).segments().len(), 1);
}

#[test]
fn test_modified_tracking() {
    let mut state = EditorState::default();
    assert!(!state.is_modified());
    add_path(&mut state, (30.0, 10.0));
    assert!(state.is_modified());
    state.save();
    assert!(!state.is_modified());
}

#[test]
fn test_preferences_are_applied() {
    let preferences = Preferences {
        max_history: 3,
        merge_timeout_ms: 0,
        point_density: 5.0,
    };
    let mut state = EditorState::new(preferences.clone());
    assert_eq!(state.history.max_history(), 3);
    assert_eq!(state.general_config.point_density, 5.0);
    assert_eq!(state.merge_timeout(), Duration::ZERO);

    state.set_preferences(Preferences {
        max_history: 10,
        ..preferences
    });
    assert_eq!(state.history.max_history(), 10);
    assert_eq!(state.preferences().max_history, 10);
}

#[test]
fn test_interested_path_follows_selection() {
    let mut state = EditorState::default();
    assert_eq!(state.interested_path(), None);

    let first = add_path(&mut state, (30.0, 10.0));
    let second = add_path(&mut state, (-30.0, 10.0));
    state.selection.clear();
    assert_eq!(state.interested_path(), Some(first));

    let segment = state.store.path(second).segments()[0];
    let knot = state.store.segment(segment).last();
    state.selection.select(PathTreeItem::EndControl(knot));
    assert_eq!(state.interested_path(), Some(second));

    state.selection.clear();
    state.selection.select(PathTreeItem::Path(first));
    assert_eq!(state.interested_path(), Some(first));
}

#[test]
fn test_export_then_import_restores_document() {
    let mut state = EditorState::default();
    let path = add_path(&mut state, (30.0, 10.0));
    let uid = state.store.path(path).uid.clone();
    let entities = state.entities().len();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("path.txt");
    std::fs::write(&file, state.export_file().unwrap()).unwrap();

    let mut restored = EditorState::default();
    restored
        .import_file(&std::fs::read_to_string(&file).unwrap())
        .unwrap();
    assert_eq!(restored.entities().len(), entities);
    let restored_path = restored.store.paths()[0];
    assert_eq!(restored.store.path(restored_path).uid, uid);
}

#[test]
fn test_import_clears_history_and_selection() {
    let mut state = EditorState::default();
    let path = add_path(&mut state, (30.0, 10.0));
    let exported = state.export_file().unwrap();
    state.selection.select(PathTreeItem::Path(path));

    state.import_file(&exported).unwrap();
    assert!(!state.history.can_undo());
    assert!(!state.history.can_redo());
    assert!(state.selection.selected().is_empty());
}

#[test]
fn test_failed_import_keeps_document() {
    let mut state = EditorState::default();
    let path = add_path(&mut state, (30.0, 10.0));
    let before = state.entities();

    assert!(state.import_file("not a path file").is_err());
    assert_eq!(state.entities(), before);
    assert_eq!(state.store.paths(), &[path]);
    assert!(state.history.can_undo());
}

#[test]
fn test_export_empty_document_fails() {
    let state = EditorState::default();
    assert!(state.export_file().is_err());
}
