use crate::model::PathTreeItem;
use indexmap::IndexSet;

/// Receives selection updates from the command history.
///
/// The history never owns the selection. It calls into a tracker so items
/// that leave the document are no longer selected, expanded or hovered, and
/// so undo/redo can select what they touched.
pub trait SelectionTracker {
    /// Removes an item from the selection.
    fn unselect(&mut self, item: &PathTreeItem);

    /// Replaces the selection.
    fn set_selected(&mut self, items: &[PathTreeItem]);

    /// Collapses a path in the tree view.
    fn remove_expanded(&mut self, item: &PathTreeItem);

    /// Clears the hover state if it is on `item`.
    fn clear_hover(&mut self, item: &PathTreeItem);
}

/// Selection, tree expansion and hover state of an editor.
///
/// `EditorSelection` is responsible for:
/// - Tracking the selected tree items in selection order
/// - Tracking which paths are expanded in the tree view
/// - Tracking the hovered item
///
/// # Selection Model
///
/// - **Ordered**: items keep the order they were selected in; the first is
///   the primary selection
/// - **Unique**: selecting an item twice keeps its first position
///
/// # Examples
///
/// ```
/// use pathkit_editor::selection_manager::EditorSelection;
///
/// let selection = EditorSelection::new();
/// assert!(selection.selected().is_empty());
/// assert_eq!(selection.hovered(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EditorSelection {
    selected: IndexSet<PathTreeItem>,
    expanded: IndexSet<PathTreeItem>,
    hovered: Option<PathTreeItem>,
}

impl EditorSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected items in selection order.
    pub fn selected(&self) -> Vec<PathTreeItem> {
        self.selected.iter().copied().collect()
    }

    /// Returns the primary (first) selected item.
    pub fn primary(&self) -> Option<PathTreeItem> {
        self.selected.first().copied()
    }

    pub fn is_selected(&self, item: &PathTreeItem) -> bool {
        self.selected.contains(item)
    }

    /// Adds an item to the selection.
    ///
    /// # Returns
    ///
    /// `true` if the item was not selected before.
    pub fn select(&mut self, item: PathTreeItem) -> bool {
        self.selected.insert(item)
    }

    /// Selects the item if unselected, unselects it otherwise (Shift+click).
    pub fn toggle(&mut self, item: PathTreeItem) {
        if !self.selected.shift_remove(&item) {
            self.selected.insert(item);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Expands a path in the tree view.
    pub fn expand(&mut self, item: PathTreeItem) {
        if item.is_path() {
            self.expanded.insert(item);
        }
    }

    pub fn is_expanded(&self, item: &PathTreeItem) -> bool {
        self.expanded.contains(item)
    }

    pub fn set_hovered(&mut self, item: Option<PathTreeItem>) {
        self.hovered = item;
    }

    pub fn hovered(&self) -> Option<PathTreeItem> {
        self.hovered
    }
}

impl SelectionTracker for EditorSelection {
    fn unselect(&mut self, item: &PathTreeItem) {
        self.selected.shift_remove(item);
    }

    fn set_selected(&mut self, items: &[PathTreeItem]) {
        self.selected = items.iter().copied().collect();
    }

    fn remove_expanded(&mut self, item: &PathTreeItem) {
        self.expanded.shift_remove(item);
    }

    fn clear_hover(&mut self, item: &PathTreeItem) {
        if self.hovered.as_ref() == Some(item) {
            self.hovered = None;
        }
    }
}
