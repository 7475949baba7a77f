//! Command history with undo, redo and merging
//!
//! The most recent execution is held back from the undo stack so the next
//! command can merge into it. It is committed to the undo stack as soon as a
//! command that does not merge arrives, or before undo, save and
//! modification checks.
//!
//! The undo stack is bounded; once it exceeds the maximum the oldest entry
//! is dropped. A save step counter tracks distance from the last save, so
//! undoing back to the saved state reports the document as unmodified.

pub mod events;

pub use events::{
    ExecutionEvent, HistoryEventType, HistoryEvents, ListenerId, UndoRedoEvent,
};

use crate::commands::CancellableCommand;
use crate::model::{PathStore, PathTreeItem};
use crate::selection_manager::SelectionTracker;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time window within which consecutive commands may merge.
pub const DEFAULT_MERGE_TIMEOUT: Duration = Duration::from_millis(500);

/// Default maximum number of undo steps.
pub const DEFAULT_MAX_HISTORY: usize = 50;

struct Execution {
    title: String,
    command: Box<dyn CancellableCommand>,
    time: Instant,
    merge_timeout: Duration,
}

impl Execution {
    fn event(&self) -> ExecutionEvent<'_> {
        ExecutionEvent {
            title: self.title.clone(),
            command: self.command.as_ref(),
            merge_timeout: self.merge_timeout,
            time: self.time,
            is_cancelled: false,
        }
    }
}

/// Undo/redo history of a document.
pub struct CommandHistory {
    last_execution: Option<Execution>,
    history: VecDeque<Box<dyn CancellableCommand>>,
    redo_history: Vec<Box<dyn CancellableCommand>>,
    save_step_counter: i64,
    max_history: usize,
    events: HistoryEvents,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl CommandHistory {
    pub fn new(max_history: usize) -> Self {
        Self {
            last_execution: None,
            history: VecDeque::new(),
            redo_history: Vec::new(),
            save_step_counter: 0,
            max_history,
            events: HistoryEvents::new(),
        }
    }

    pub fn events(&self) -> &HistoryEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut HistoryEvents {
        &mut self.events
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Changes the bound; excess entries are dropped on the next commit.
    pub fn set_max_history(&mut self, max_history: usize) {
        self.max_history = max_history;
    }

    /// Executes a command and records it.
    ///
    /// Returns `false` if a listener cancelled the command or the command
    /// changed nothing. A command merged into the previous execution also
    /// returns `true`.
    pub fn execute(
        &mut self,
        store: &mut PathStore,
        tracker: &mut dyn SelectionTracker,
        title: impl Into<String>,
        command: Box<dyn CancellableCommand>,
        merge_timeout: Duration,
    ) -> bool {
        self.execute_at(store, tracker, title, command, merge_timeout, Instant::now())
    }

    /// [`execute`](Self::execute) with an explicit timestamp.
    pub fn execute_at(
        &mut self,
        store: &mut PathStore,
        tracker: &mut dyn SelectionTracker,
        title: impl Into<String>,
        mut command: Box<dyn CancellableCommand>,
        merge_timeout: Duration,
        now: Instant,
    ) -> bool {
        let mut before = ExecutionEvent {
            title: title.into(),
            command: command.as_ref(),
            merge_timeout,
            time: now,
            is_cancelled: false,
        };
        self.events
            .fire_execution(HistoryEventType::BeforeExecution, &mut before);
        let ExecutionEvent {
            title,
            merge_timeout,
            time,
            is_cancelled,
            ..
        } = before;
        if is_cancelled {
            tracing::debug!("Execution of {:?} cancelled by listener", title);
            return false;
        }

        if !command.execute(store) {
            tracing::debug!("Execution of {:?} changed nothing", title);
            return false;
        }

        if let Some(removed) = command.removed_items() {
            for item in removed {
                unlink(tracker, item);
            }
        }

        let merged = match self.last_execution.as_mut() {
            Some(last)
                if last.title == title
                    && time.saturating_duration_since(last.time) < merge_timeout
                    && command.as_mergeable().is_some() =>
            {
                match last.command.as_mergeable() {
                    Some(target) => target.merge(command.as_ref()),
                    None => false,
                }
            }
            _ => false,
        };

        if merged {
            let Self {
                last_execution,
                events,
                ..
            } = self;
            if let Some(last) = last_execution.as_mut() {
                last.time = time;
                tracing::debug!("MERGE {:?}", last.title);
                events.fire_execution(HistoryEventType::Merge, &mut last.event());
            }
        } else {
            self.commit();
            tracing::debug!("EXECUTE {:?}", title);
            let execution = Execution {
                title,
                command,
                time,
                merge_timeout,
            };
            self.events
                .fire_execution(HistoryEventType::Execute, &mut execution.event());
            self.last_execution = Some(execution);
        }

        self.redo_history.clear();
        true
    }

    /// Moves the pending execution to the undo stack.
    pub fn commit(&mut self) {
        if let Some(execution) = self.last_execution.take() {
            self.history.push_back(execution.command);
            self.save_step_counter += 1;
            while self.history.len() > self.max_history {
                self.history.pop_front();
            }
        }
    }

    pub fn undo(&mut self, store: &mut PathStore, tracker: &mut dyn SelectionTracker) -> bool {
        self.commit();
        let Some(mut command) = self.history.pop_back() else {
            return false;
        };
        command.undo(store);
        self.save_step_counter -= 1;

        let added = command.added_items();
        let removed = command.removed_items();
        let updated = command.updated_items();
        if let Some(added) = added {
            for item in added {
                unlink(tracker, item);
            }
        }
        if removed.is_some() || updated.is_some() {
            let mut selected: Vec<PathTreeItem> = Vec::new();
            selected.extend(removed.unwrap_or_default());
            selected.extend(updated.unwrap_or_default());
            tracker.set_selected(&selected);
        }

        tracing::debug!("UNDO (remaining: {})", self.history.len());
        self.events.fire_undo_redo(
            HistoryEventType::AfterUndo,
            &UndoRedoEvent {
                command: command.as_ref(),
            },
        );
        self.redo_history.push(command);
        true
    }

    pub fn redo(&mut self, store: &mut PathStore, tracker: &mut dyn SelectionTracker) -> bool {
        let Some(mut command) = self.redo_history.pop() else {
            return false;
        };
        command.redo(store);
        self.save_step_counter += 1;

        let added = command.added_items();
        let removed = command.removed_items();
        let updated = command.updated_items();
        if let Some(removed) = removed {
            for item in removed {
                unlink(tracker, item);
            }
        }
        if added.is_some() || updated.is_some() {
            let mut selected: Vec<PathTreeItem> = Vec::new();
            selected.extend(added.unwrap_or_default());
            selected.extend(updated.unwrap_or_default());
            tracker.set_selected(&selected);
        }

        tracing::debug!("REDO (remaining: {})", self.redo_history.len());
        self.events.fire_undo_redo(
            HistoryEventType::AfterRedo,
            &UndoRedoEvent {
                command: command.as_ref(),
            },
        );
        self.history.push_back(command);
        true
    }

    /// Drops all history. The current state becomes the saved state.
    pub fn clear_history(&mut self) {
        self.last_execution = None;
        self.history.clear();
        self.redo_history.clear();
        self.save_step_counter = 0;
    }

    /// Marks the current state as saved.
    pub fn save(&mut self) {
        self.commit();
        self.save_step_counter = 0;
    }

    pub fn is_modified(&mut self) -> bool {
        self.commit();
        self.save_step_counter != 0
    }

    pub fn can_undo(&self) -> bool {
        self.last_execution.is_some() || !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    /// Number of undo steps, including the pending execution.
    ///
    /// This is the number of successful [`undo`](Self::undo) calls available,
    /// which is one more than the committed stack while an execution is
    /// still open for merging. See [`committed_history_size`](Self::committed_history_size)
    /// for the stack alone.
    pub fn undo_history_size(&self) -> usize {
        self.history.len() + usize::from(self.last_execution.is_some())
    }

    /// Number of committed undo steps, without the pending execution.
    pub fn committed_history_size(&self) -> usize {
        self.history.len()
    }

    pub fn redo_history_size(&self) -> usize {
        self.redo_history.len()
    }

    /// Title of the pending execution, if any.
    pub fn last_title(&self) -> Option<&str> {
        self.last_execution.as_ref().map(|e| e.title.as_str())
    }
}

/// Drops an item that left the document from selection, expansion and hover.
fn unlink(tracker: &mut dyn SelectionTracker, item: &PathTreeItem) {
    tracker.unselect(item);
    if item.is_path() {
        tracker.remove_expanded(item);
    }
    tracker.clear_hover(item);
}
