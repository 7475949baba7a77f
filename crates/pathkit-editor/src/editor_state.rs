//! Editor state for UI integration.
//! Ties a document to its history, selection and file format.

use crate::commands::CancellableCommand;
use crate::format::{import_path_file, Format, LemLibFormatV0_4};
use crate::history::CommandHistory;
use crate::model::{GeneralConfig, PathConfig, PathId, PathStore, PathTreeItem};
use crate::sampling::{SampleCache, UniformSampler};
use crate::selection_manager::EditorSelection;
use crate::serialization::PathFileData;
use crate::structure::traversal;
use pathkit_core::Result;
use pathkit_settings::Preferences;
use std::time::Duration;

/// Editor state for UI integration
pub struct EditorState {
    pub store: PathStore,
    pub history: CommandHistory,
    pub selection: EditorSelection,
    pub general_config: GeneralConfig,
    pub samples: SampleCache,
    format: Box<dyn Format>,
    preferences: Preferences,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl EditorState {
    /// Creates an empty document in the LemLib v0.4 format.
    pub fn new(preferences: Preferences) -> Self {
        Self::with_format(preferences, Box::new(LemLibFormatV0_4::new()))
    }

    pub fn with_format(preferences: Preferences, format: Box<dyn Format>) -> Self {
        let mut general_config = format.default_general_config();
        general_config.point_density = preferences.point_density;
        Self {
            store: PathStore::new(),
            history: CommandHistory::new(preferences.max_history),
            selection: EditorSelection::new(),
            general_config,
            samples: SampleCache::new(),
            format,
            preferences,
        }
    }

    pub fn format(&self) -> &dyn Format {
        self.format.as_ref()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Applies new preferences to the history of the open document.
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.history.set_max_history(preferences.max_history);
        self.preferences = preferences;
    }

    pub fn merge_timeout(&self) -> Duration {
        self.preferences.merge_timeout()
    }

    /// Configuration for a new path in the current format.
    pub fn new_path_config(&self) -> PathConfig {
        self.format.build_path_config()
    }

    /// Executes a command with the editor's merge timeout.
    pub fn execute(&mut self, title: impl Into<String>, command: impl CancellableCommand) -> bool {
        let merge_timeout = self.merge_timeout();
        self.execute_with_timeout(title, command, merge_timeout)
    }

    pub fn execute_with_timeout(
        &mut self,
        title: impl Into<String>,
        command: impl CancellableCommand,
        merge_timeout: Duration,
    ) -> bool {
        let executed = self.history.execute(
            &mut self.store,
            &mut self.selection,
            title,
            Box::new(command),
            merge_timeout,
        );
        if executed {
            self.samples.clear();
        }
        executed
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.store, &mut self.selection);
        if undone {
            self.samples.clear();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.store, &mut self.selection);
        if redone {
            self.samples.clear();
        }
        redone
    }

    pub fn save(&mut self) {
        self.history.save();
    }

    pub fn is_modified(&mut self) -> bool {
        self.history.is_modified()
    }

    /// All tree items of the document in display order.
    pub fn entities(&self) -> Vec<PathTreeItem> {
        traversal(&self.store, self.store.paths())
    }

    /// The first selected path, or the path owning the first selected
    /// control, or the first path.
    pub fn interested_path(&self) -> Option<PathId> {
        for item in self.selection.selected() {
            match item {
                PathTreeItem::Path(id) if self.store.contains_path(id) => return Some(id),
                PathTreeItem::Control(c) | PathTreeItem::EndControl(c) => {
                    let owner = self
                        .store
                        .paths()
                        .iter()
                        .find(|p| self.store.path_controls(**p).contains(&c));
                    if let Some(owner) = owner {
                        return Some(*owner);
                    }
                }
                _ => {}
            }
        }
        self.store.paths().first().copied()
    }

    /// Replaces the document with the content of a path file.
    ///
    /// On error the current document is left as is.
    pub fn import_file(&mut self, content: &str) -> Result<()> {
        let (data, store) = match self.read_path_file(content) {
            Ok(read) => read,
            Err(err) => {
                tracing::warn!("Failed to import path file: {}", err);
                return Err(err);
            }
        };
        tracing::info!(
            "Imported {} path(s) written by version {}",
            store.paths().len(),
            data.app_version
        );
        self.store = store;
        self.general_config = data.general_config;
        self.selection = EditorSelection::new();
        self.samples.clear();
        self.history.clear_history();
        Ok(())
    }

    fn read_path_file(&self, content: &str) -> Result<(PathFileData, PathStore)> {
        let data = import_path_file(self.format.as_ref(), content)?;
        let store = data.build_store()?;
        Ok((data, store))
    }

    /// Exports the interested path in the current format.
    pub fn export_file(&self) -> Result<String> {
        let path = self.interested_path();
        self.format
            .export_path_file(&self.store, &self.general_config, path, &UniformSampler)
            .map_err(|err| {
                tracing::warn!("Failed to export path file: {}", err);
                err.into()
            })
    }

    /// Snapshot of the whole document.
    pub fn path_file_data(&self) -> PathFileData {
        PathFileData::from_store(&self.store, &self.general_config)
    }
}
