//! Undoable editing commands
//!
//! Every change to a document goes through a [`CancellableCommand`] executed
//! by [`CommandHistory`](crate::history::CommandHistory). A command captures
//! whatever it needs to undo itself on its first `execute`, so `undo` and
//! `redo` can be repeated any number of times.
//!
//! Commands also report which tree items they added, updated or removed.
//! The history uses these lists to keep the selection consistent.

mod continuity;
mod convert;
mod drag;
mod keyframe;
mod removal;
mod segment;
mod split;
mod tree;
mod update;

pub use continuity::{Continuity, LockControlContinuity};
pub use convert::ConvertSegment;
pub use drag::DragControls;
pub use keyframe::{AddKeyframe, MoveKeyframe, RemoveKeyframe};
pub use removal::{RemovePathTreeItems, RemovePathsAndEndControls};
pub use segment::AddSegment;
pub use split::SplitSegment;
pub use tree::{AddPath, InsertControls, InsertPaths, MovePath, MovePathTreeItem};
pub use update::{ItemPatch, PathConfigPatch, UpdatePathConfig, UpdatePathTreeItems};

use crate::model::{PathStore, PathTreeItem};
use std::any::Any;

/// Access to a command as [`Any`] for downcasting.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A command that can be executed, undone and redone.
pub trait CancellableCommand: AsAny {
    /// Applies the command. Returns `false` if nothing changed, in which
    /// case the command is discarded rather than recorded.
    fn execute(&mut self, store: &mut PathStore) -> bool;

    fn undo(&mut self, store: &mut PathStore);

    fn redo(&mut self, store: &mut PathStore);

    /// Items this command adds, if it is a command that adds items.
    fn added_items(&self) -> Option<&[PathTreeItem]> {
        None
    }

    /// Items this command updates, if it is a command that updates items.
    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        None
    }

    /// Items this command removes, if it is a command that removes items.
    fn removed_items(&self) -> Option<&[PathTreeItem]> {
        None
    }

    /// Merge capability, for commands that coalesce consecutive edits.
    fn as_mergeable(&mut self) -> Option<&mut dyn MergeableCommand> {
        None
    }
}

/// A command that can absorb a later command of the same kind.
pub trait MergeableCommand {
    /// Folds `latest`, which has already been executed, into `self`.
    /// Returns `false` if the two commands cannot be merged.
    fn merge(&mut self, latest: &dyn CancellableCommand) -> bool;
}

/// Downcasts a command to a concrete type.
pub fn downcast<T: 'static>(command: &dyn CancellableCommand) -> Option<&T> {
    command.as_any().downcast_ref::<T>()
}
