//! Structural edits on the flattened path tree.

use super::CancellableCommand;
use crate::model::{Control, PathId, PathStore, PathTreeItem};
use crate::structure::{
    apply_structure_memento, construct, create_structure_memento, traversal, PathStructureMemento,
};

fn paths_of(items: &[PathTreeItem]) -> Vec<PathId> {
    items.iter().filter_map(|i| i.path_id()).collect()
}

/// Moves a path to another position in the document order.
pub struct MovePath {
    from: usize,
    to: usize,
    moving: Vec<PathTreeItem>,
}

impl MovePath {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            moving: Vec::new(),
        }
    }

    fn is_valid(&self, store: &PathStore) -> bool {
        let len = store.paths().len();
        self.from < len && self.to < len && self.from != self.to
    }

    fn shift(store: &mut PathStore, from: usize, to: usize) {
        let paths = store.paths_mut();
        let path = paths.remove(from);
        paths.insert(to, path);
    }
}

impl CancellableCommand for MovePath {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        if !self.is_valid(store) {
            return false;
        }
        self.moving = vec![PathTreeItem::Path(store.paths()[self.from])];
        Self::shift(store, self.from, self.to);
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        Self::shift(store, self.to, self.from);
    }

    fn redo(&mut self, store: &mut PathStore) {
        Self::shift(store, self.from, self.to);
    }

    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.moving)
    }
}

/// Moves one item of the flattened tree and rebuilds the affected paths.
///
/// `entities` is the tree as currently shown, usually [`traversal`] of all
/// paths. Nothing changes if the moved list is not a valid structure.
pub struct MovePathTreeItem {
    entities: Vec<PathTreeItem>,
    from: usize,
    to: usize,
    moving: Vec<PathTreeItem>,
    removed: Vec<PathTreeItem>,
    original: Vec<PathStructureMemento>,
    modified: Vec<PathStructureMemento>,
}

impl MovePathTreeItem {
    pub fn new(entities: Vec<PathTreeItem>, from: usize, to: usize) -> Self {
        Self {
            entities,
            from,
            to,
            moving: Vec::new(),
            removed: Vec::new(),
            original: Vec::new(),
            modified: Vec::new(),
        }
    }

    fn is_valid(&self) -> bool {
        let len = self.entities.len();
        self.from < len && self.to < len && self.from != self.to
    }
}

impl CancellableCommand for MovePathTreeItem {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        if !self.is_valid() {
            return false;
        }
        let paths = paths_of(&self.entities);
        let original = create_structure_memento(store, &paths);

        let mut temp = self.entities.clone();
        let moving = temp.remove(self.from);
        temp.insert(self.to, moving);

        let Some(removed) = construct(store, &temp) else {
            return false;
        };

        self.original = original;
        self.removed = removed;
        self.moving = vec![moving];
        self.modified = create_structure_memento(store, &paths);
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        apply_structure_memento(store, &self.original);
    }

    fn redo(&mut self, store: &mut PathStore) {
        apply_structure_memento(store, &self.modified);
    }

    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.moving)
    }

    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.removed)
    }
}

/// Inserts paths into the document order.
///
/// The paths must already exist in the store, created with
/// [`PathStore::create_path`].
pub struct InsertPaths {
    idx: Option<usize>,
    inserting: Vec<PathId>,
    added: Vec<PathTreeItem>,
}

impl InsertPaths {
    pub fn new(idx: usize, inserting: Vec<PathId>) -> Self {
        Self {
            idx: Some(idx),
            inserting,
            added: Vec::new(),
        }
    }

    fn index(&self, store: &PathStore) -> usize {
        self.idx.unwrap_or(store.paths().len())
    }
}

impl CancellableCommand for InsertPaths {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let idx = self.index(store);
        if idx > store.paths().len() {
            return false;
        }
        self.idx = Some(idx);
        self.added = traversal(store, &self.inserting);
        let paths = store.paths_mut();
        for (offset, path) in self.inserting.iter().enumerate() {
            paths.insert(idx + offset, *path);
        }
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        let idx = self.index(store);
        let paths = store.paths_mut();
        let end = (idx + self.inserting.len()).min(paths.len());
        paths.drain(idx..end);
    }

    fn redo(&mut self, store: &mut PathStore) {
        self.execute(store);
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.added)
    }
}

/// Appends a path to the end of the document.
pub struct AddPath(InsertPaths);

impl AddPath {
    pub fn new(path: PathId) -> Self {
        Self(InsertPaths {
            idx: None,
            inserting: vec![path],
            added: Vec::new(),
        })
    }
}

impl CancellableCommand for AddPath {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        self.0.execute(store)
    }

    fn undo(&mut self, store: &mut PathStore) {
        self.0.undo(store);
    }

    fn redo(&mut self, store: &mut PathStore) {
        self.0.redo(store);
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        self.0.added_items()
    }
}

/// Inserts new controls into the flattened tree and rebuilds the affected
/// paths.
///
/// `idx` is a position in `entities` and must not be 0, which would put a
/// control before the first path.
pub struct InsertControls {
    entities: Vec<PathTreeItem>,
    idx: usize,
    inserting: Vec<Control>,
    added: Vec<PathTreeItem>,
    removed: Vec<PathTreeItem>,
    original: Vec<PathStructureMemento>,
    modified: Vec<PathStructureMemento>,
}

impl InsertControls {
    pub fn new(entities: Vec<PathTreeItem>, idx: usize, inserting: Vec<Control>) -> Self {
        Self {
            entities,
            idx,
            inserting,
            added: Vec::new(),
            removed: Vec::new(),
            original: Vec::new(),
            modified: Vec::new(),
        }
    }

    fn is_valid(&self) -> bool {
        self.idx >= 1 && self.idx <= self.entities.len() && !self.inserting.is_empty()
    }
}

impl CancellableCommand for InsertControls {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        if !self.is_valid() {
            return false;
        }
        let paths = paths_of(&self.entities);
        let original = create_structure_memento(store, &paths);

        let added: Vec<PathTreeItem> = std::mem::take(&mut self.inserting)
            .into_iter()
            .map(|c| {
                let id = store.add_control(c);
                store.item(id)
            })
            .collect();
        let mut temp = self.entities[..self.idx].to_vec();
        temp.extend_from_slice(&added);
        temp.extend_from_slice(&self.entities[self.idx..]);

        let Some(removed) = construct(store, &temp) else {
            return false;
        };

        self.original = original;
        self.added = added;
        self.removed = removed;
        self.modified = create_structure_memento(store, &paths);
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        apply_structure_memento(store, &self.original);
    }

    fn redo(&mut self, store: &mut PathStore) {
        apply_structure_memento(store, &self.modified);
    }

    fn added_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.added)
    }

    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.removed)
    }
}
