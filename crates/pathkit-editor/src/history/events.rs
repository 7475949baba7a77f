//! Listener registry for command history events.
//!
//! Listeners are called synchronously in registration order. A
//! before-execution listener may cancel the command or change its title and
//! merge timeout.

use crate::commands::{downcast, CancellableCommand};
use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of history event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryEventType {
    BeforeExecution,
    Merge,
    Execute,
    AfterUndo,
    AfterRedo,
}

impl fmt::Display for HistoryEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BeforeExecution => "beforeExecution",
            Self::Merge => "merge",
            Self::Execute => "execute",
            Self::AfterUndo => "afterUndo",
            Self::AfterRedo => "afterRedo",
        };
        write!(f, "{}", name)
    }
}

/// An execution as seen by listeners.
pub struct ExecutionEvent<'c> {
    pub title: String,
    pub command: &'c dyn CancellableCommand,
    pub merge_timeout: Duration,
    pub time: Instant,
    /// Set by a before-execution listener to drop the command.
    pub is_cancelled: bool,
}

impl ExecutionEvent<'_> {
    pub fn command_is<T: 'static>(&self) -> bool {
        downcast::<T>(self.command).is_some()
    }

    pub fn command_as<T: 'static>(&self) -> Option<&T> {
        downcast::<T>(self.command)
    }
}

/// An undo or redo as seen by listeners.
pub struct UndoRedoEvent<'c> {
    pub command: &'c dyn CancellableCommand,
}

impl UndoRedoEvent<'_> {
    pub fn command_is<T: 'static>(&self) -> bool {
        downcast::<T>(self.command).is_some()
    }
}

type ExecutionListener = Box<dyn for<'c> FnMut(&mut ExecutionEvent<'c>)>;
type UndoRedoListener = Box<dyn for<'c> FnMut(&UndoRedoEvent<'c>)>;

struct ListenerList<L> {
    entries: Vec<(ListenerId, L)>,
}

impl<L> Default for ListenerList<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> ListenerList<L> {
    fn add(&mut self, listener: L) -> ListenerId {
        let id = ListenerId::new();
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(lid, _)| *lid != id);
        self.entries.len() != before
    }
}

/// Registry of history listeners, one list per event type.
#[derive(Default)]
pub struct HistoryEvents {
    before_execution: ListenerList<ExecutionListener>,
    merge: ListenerList<ExecutionListener>,
    execute: ListenerList<ExecutionListener>,
    after_undo: ListenerList<UndoRedoListener>,
    after_redo: ListenerList<UndoRedoListener>,
}

impl HistoryEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `BeforeExecution`, `Merge` or `Execute`.
    /// Returns `None` for undo/redo event types.
    pub fn add_execution_listener<F>(&mut self, event: HistoryEventType, listener: F) -> Option<ListenerId>
    where
        F: for<'c> FnMut(&mut ExecutionEvent<'c>) + 'static,
    {
        let list = match event {
            HistoryEventType::BeforeExecution => &mut self.before_execution,
            HistoryEventType::Merge => &mut self.merge,
            HistoryEventType::Execute => &mut self.execute,
            HistoryEventType::AfterUndo | HistoryEventType::AfterRedo => return None,
        };
        let id = list.add(Box::new(listener));
        tracing::debug!("Listener {} added for {}", id, event);
        Some(id)
    }

    /// Registers a listener for `AfterUndo` or `AfterRedo`.
    /// Returns `None` for execution event types.
    pub fn add_undo_redo_listener<F>(&mut self, event: HistoryEventType, listener: F) -> Option<ListenerId>
    where
        F: for<'c> FnMut(&UndoRedoEvent<'c>) + 'static,
    {
        let list = match event {
            HistoryEventType::AfterUndo => &mut self.after_undo,
            HistoryEventType::AfterRedo => &mut self.after_redo,
            _ => return None,
        };
        let id = list.add(Box::new(listener));
        tracing::debug!("Listener {} added for {}", id, event);
        Some(id)
    }

    pub fn on_before_execution<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'c> FnMut(&mut ExecutionEvent<'c>) + 'static,
    {
        self.before_execution.add(Box::new(listener))
    }

    pub fn on_merge<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'c> FnMut(&mut ExecutionEvent<'c>) + 'static,
    {
        self.merge.add(Box::new(listener))
    }

    pub fn on_execute<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'c> FnMut(&mut ExecutionEvent<'c>) + 'static,
    {
        self.execute.add(Box::new(listener))
    }

    pub fn on_after_undo<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'c> FnMut(&UndoRedoEvent<'c>) + 'static,
    {
        self.after_undo.add(Box::new(listener))
    }

    pub fn on_after_redo<F>(&mut self, listener: F) -> ListenerId
    where
        F: for<'c> FnMut(&UndoRedoEvent<'c>) + 'static,
    {
        self.after_redo.add(Box::new(listener))
    }

    /// Removes a listener of any event type.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.before_execution.remove(id)
            || self.merge.remove(id)
            || self.execute.remove(id)
            || self.after_undo.remove(id)
            || self.after_redo.remove(id);
        if removed {
            tracing::debug!("Listener {} removed", id);
        }
        removed
    }

    pub fn listener_count(&self, event: HistoryEventType) -> usize {
        match event {
            HistoryEventType::BeforeExecution => self.before_execution.entries.len(),
            HistoryEventType::Merge => self.merge.entries.len(),
            HistoryEventType::Execute => self.execute.entries.len(),
            HistoryEventType::AfterUndo => self.after_undo.entries.len(),
            HistoryEventType::AfterRedo => self.after_redo.entries.len(),
        }
    }

    pub(crate) fn fire_execution(&mut self, event: HistoryEventType, payload: &mut ExecutionEvent<'_>) {
        let list = match event {
            HistoryEventType::BeforeExecution => &mut self.before_execution,
            HistoryEventType::Merge => &mut self.merge,
            HistoryEventType::Execute => &mut self.execute,
            HistoryEventType::AfterUndo | HistoryEventType::AfterRedo => return,
        };
        for (_, listener) in list.entries.iter_mut() {
            listener(payload);
        }
    }

    pub(crate) fn fire_undo_redo(&mut self, event: HistoryEventType, payload: &UndoRedoEvent<'_>) {
        let list = match event {
            HistoryEventType::AfterUndo => &mut self.after_undo,
            HistoryEventType::AfterRedo => &mut self.after_redo,
            _ => return,
        };
        for (_, listener) in list.entries.iter_mut() {
            listener(payload);
        }
    }
}
