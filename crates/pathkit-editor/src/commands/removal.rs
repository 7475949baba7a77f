//! Removing paths and controls.

use super::CancellableCommand;
use crate::model::{ControlId, PathId, PathStore, PathTreeItem, SegmentId};
use crate::structure::{
    apply_structure_memento, construct, create_structure_memento, traversal, PathStructureMemento,
};
use pathkit_core::ModelError;
use std::collections::HashSet;

struct SegmentAction {
    path: PathId,
    index: usize,
    segment: SegmentId,
    link_needed: bool,
}

/// Removes whole paths and end controls together with their segments.
///
/// Removing an end control drops the segment it starts. The last knot of a
/// path drops the last segment instead. When an interior segment goes, its
/// predecessor is relinked to end where the removed segment ended. Intermediate
/// controls in the list are ignored; use [`RemovePathTreeItems`] for those.
pub struct RemovePathsAndEndControls {
    targets: Vec<PathTreeItem>,
    path_actions: Vec<(usize, PathId)>,
    segment_actions: Vec<SegmentAction>,
    removed: Vec<PathTreeItem>,
}

impl RemovePathsAndEndControls {
    pub fn new(targets: Vec<PathTreeItem>) -> Self {
        Self {
            targets,
            path_actions: Vec::new(),
            segment_actions: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Resolves uids against the document.
    pub fn from_uids<S: AsRef<str>>(store: &PathStore, uids: &[S]) -> Result<Self, ModelError> {
        let targets = uids
            .iter()
            .map(|uid| {
                store
                    .find_by_uid(uid.as_ref())
                    .ok_or_else(|| ModelError::UnknownUid {
                        uid: uid.as_ref().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(targets))
    }

    fn resolve(&self, store: &PathStore) -> (Vec<PathId>, Vec<(PathId, ControlId)>) {
        let mut wanted: HashSet<PathTreeItem> =
            self.targets.iter().map(|i| store.normalize(*i)).collect();
        let mut paths = Vec::new();
        let mut controls = Vec::new();
        for path in store.paths() {
            if wanted.remove(&PathTreeItem::Path(*path)) {
                paths.push(*path);
                continue;
            }
            for control in store.path_controls(*path) {
                if wanted.remove(&PathTreeItem::EndControl(control)) {
                    controls.push((*path, control));
                }
            }
        }
        (paths, controls)
    }

    fn remove_path(&mut self, store: &mut PathStore, path: PathId) {
        let Some(index) = store.paths().iter().position(|p| *p == path) else {
            return;
        };
        store.paths_mut().remove(index);
        self.path_actions.push((index, path));
        self.removed.extend(traversal(store, &[path]));
    }

    fn remove_control(&mut self, store: &mut PathStore, path: PathId, control: ControlId) {
        let segments = store.path(path).segments().to_vec();
        for (index, segment) in segments.iter().enumerate() {
            let seg = store.segment(*segment);
            let is_first = seg.first() == control;
            let is_last_segment = index + 1 == segments.len();
            if !is_first && !(is_last_segment && seg.last() == control) {
                continue;
            }

            let link_needed = is_first && index > 0;
            let ids = seg.controls().to_vec();
            if link_needed {
                let prev = segments[index - 1];
                let end = ids[ids.len() - 1];
                let prev_controls = &mut store.segment_mut(prev).controls;
                let last = prev_controls.len() - 1;
                prev_controls[last] = end;
            }
            store.path_mut(path).segments.remove(index);
            self.segment_actions.push(SegmentAction {
                path,
                index,
                segment: *segment,
                link_needed,
            });

            let gone = if segments.len() == 1 {
                &ids[..]
            } else if is_first {
                &ids[..ids.len() - 1]
            } else {
                &ids[1..]
            };
            self.removed.extend(gone.iter().map(|c| store.item(*c)));
            return;
        }
    }

    fn relink(store: &mut PathStore, action: &SegmentAction, knot: ControlId) {
        if !action.link_needed {
            return;
        }
        let prev = store.path(action.path).segments()[action.index - 1];
        let controls = &mut store.segment_mut(prev).controls;
        let last = controls.len() - 1;
        controls[last] = knot;
    }
}

impl CancellableCommand for RemovePathsAndEndControls {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let (paths, controls) = self.resolve(store);
        if paths.is_empty() && controls.is_empty() {
            return false;
        }
        for path in paths {
            self.remove_path(store, path);
        }
        for (path, control) in controls {
            self.remove_control(store, path, control);
        }
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        for (index, path) in self.path_actions.iter().rev() {
            store.paths_mut().insert(*index, *path);
        }
        for action in self.segment_actions.iter().rev() {
            store
                .path_mut(action.path)
                .segments
                .insert(action.index, action.segment);
            let first = store.segment(action.segment).first();
            Self::relink(store, action, first);
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        for (index, _) in &self.path_actions {
            store.paths_mut().remove(*index);
        }
        for action in &self.segment_actions {
            store.path_mut(action.path).segments.remove(action.index);
            let last = store.segment(action.segment).last();
            Self::relink(store, action, last);
        }
    }

    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.removed)
    }
}

/// Removes arbitrary tree items and rebuilds the affected paths.
///
/// The remaining items of every path are reconciled, so removing a knot
/// between two segments merges them when the handle count allows it.
/// Nothing changes if the remaining list is not a valid structure.
pub struct RemovePathTreeItems {
    removal: Vec<PathTreeItem>,
    removed: Vec<PathTreeItem>,
    original: Vec<PathStructureMemento>,
    modified: Vec<PathStructureMemento>,
    original_order: Vec<PathId>,
    modified_order: Vec<PathId>,
}

impl RemovePathTreeItems {
    pub fn new(removal: Vec<PathTreeItem>) -> Self {
        Self {
            removal,
            removed: Vec::new(),
            original: Vec::new(),
            modified: Vec::new(),
            original_order: Vec::new(),
            modified_order: Vec::new(),
        }
    }

    fn restore(store: &mut PathStore, mementos: &[PathStructureMemento], order: &[PathId]) {
        apply_structure_memento(store, mementos);
        *store.paths_mut() = order.to_vec();
    }
}

impl CancellableCommand for RemovePathTreeItems {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let removal: HashSet<PathTreeItem> =
            self.removal.iter().map(|i| store.normalize(*i)).collect();
        let all_paths = store.paths().to_vec();
        let before = traversal(store, &all_paths);
        self.original = create_structure_memento(store, &all_paths);
        self.original_order = all_paths.clone();

        let existing: Vec<PathId> = all_paths
            .into_iter()
            .filter(|p| !removal.contains(&PathTreeItem::Path(*p)))
            .collect();
        let remaining: Vec<PathTreeItem> = traversal(store, &existing)
            .into_iter()
            .filter(|i| !removal.contains(i))
            .collect();

        if !remaining.is_empty() && construct(store, &remaining).is_none() {
            return false;
        }
        *store.paths_mut() = existing.clone();

        let after: HashSet<PathTreeItem> = traversal(store, &existing).into_iter().collect();
        self.removed = before.into_iter().filter(|i| !after.contains(i)).collect();
        if self.removed.is_empty() {
            Self::restore(store, &self.original, &self.original_order);
            return false;
        }

        self.modified = create_structure_memento(store, &self.original_order);
        self.modified_order = existing;
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        Self::restore(store, &self.original, &self.original_order);
    }

    fn redo(&mut self, store: &mut PathStore) {
        Self::restore(store, &self.modified, &self.modified_order);
    }

    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.removed)
    }
}
