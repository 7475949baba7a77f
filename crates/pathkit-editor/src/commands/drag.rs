use super::{downcast, CancellableCommand, MergeableCommand};
use crate::model::{ControlId, PathStore, PathTreeItem};
use pathkit_core::Vector;

/// Drags a control to a new position, moving its followers by the same
/// offset.
///
/// Consecutive drags of the same control with the same followers merge, so
/// a whole mouse drag is undone in one step. An empty follower list still
/// moves the main control; only `from == to` is a no-op.
pub struct DragControls {
    main: ControlId,
    from: Vector,
    to: Vector,
    followers: Vec<ControlId>,
    updated: Vec<PathTreeItem>,
}

impl DragControls {
    pub fn new(main: ControlId, from: Vector, to: Vector, followers: Vec<ControlId>) -> Self {
        Self {
            main,
            from,
            to,
            followers,
            updated: Vec::new(),
        }
    }

    fn shift(&self, store: &mut PathStore, target: Vector, offset: Vector) {
        for id in &self.followers {
            let position = store.position(*id);
            store.set_position(*id, position + offset);
        }
        store.set_position(self.main, target);
    }
}

impl CancellableCommand for DragControls {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        if self.from == self.to {
            return false;
        }
        self.shift(store, self.to, self.to - self.from);
        self.updated = std::iter::once(self.main)
            .chain(self.followers.iter().copied())
            .map(|c| store.item(c))
            .collect();
        true
    }

    fn undo(&mut self, store: &mut PathStore) {
        self.shift(store, self.from, self.from - self.to);
    }

    fn redo(&mut self, store: &mut PathStore) {
        self.shift(store, self.to, self.to - self.from);
    }

    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.updated)
    }

    fn as_mergeable(&mut self) -> Option<&mut dyn MergeableCommand> {
        Some(self)
    }
}

impl MergeableCommand for DragControls {
    fn merge(&mut self, latest: &dyn CancellableCommand) -> bool {
        let Some(latest) = downcast::<DragControls>(latest) else {
            return false;
        };
        if latest.main != self.main || latest.followers != self.followers {
            return false;
        }
        self.to = latest.to;
        true
    }
}
