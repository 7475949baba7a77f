//! Property updates on tree items and path configuration.

use super::{downcast, CancellableCommand, MergeableCommand};
use crate::model::{Path, PathId, PathStore, PathTreeItem};

/// A set of optional property values.
///
/// Fields that do not apply to an item are ignored: `name` only applies to
/// paths, `x`/`y` only to controls, `heading` only to end controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub heading: Option<f64>,
    pub visible: Option<bool>,
    pub lock: Option<bool>,
    pub name: Option<String>,
}

impl ItemPatch {
    pub fn visible(value: bool) -> Self {
        Self {
            visible: Some(value),
            ..Self::default()
        }
    }

    pub fn lock(value: bool) -> Self {
        Self {
            lock: Some(value),
            ..Self::default()
        }
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Fields of `other` override fields of `self`.
    fn overlay(&self, other: &ItemPatch) -> ItemPatch {
        ItemPatch {
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            heading: other.heading.or(self.heading),
            visible: other.visible.or(self.visible),
            lock: other.lock.or(self.lock),
            name: other.name.clone().or_else(|| self.name.clone()),
        }
    }
}

fn assign<T: PartialEq + Clone>(target: &mut T, value: &T, previous: &mut Option<T>) -> bool {
    *previous = Some(target.clone());
    if target == value {
        return false;
    }
    *target = value.clone();
    true
}

/// Applies a patch to one item. Returns whether anything changed and the
/// previous values of the fields that were applied.
fn apply_patch(store: &mut PathStore, item: PathTreeItem, patch: &ItemPatch) -> (bool, ItemPatch) {
    let mut previous = ItemPatch::default();
    let mut changed = false;
    match item {
        PathTreeItem::Path(id) => {
            let path = store.path_mut(id);
            if let Some(v) = &patch.visible {
                changed |= assign(&mut path.visible, v, &mut previous.visible);
            }
            if let Some(v) = &patch.lock {
                changed |= assign(&mut path.lock, v, &mut previous.lock);
            }
            if let Some(name) = &patch.name {
                match Path::check_name(name) {
                    Ok(()) => changed |= assign(&mut path.name, name, &mut previous.name),
                    Err(err) => tracing::warn!("Ignoring path name: {}", err),
                }
            }
        }
        PathTreeItem::Control(id) | PathTreeItem::EndControl(id) => {
            let control = store.control_mut(id);
            if let Some(v) = &patch.x {
                changed |= assign(&mut control.position.x, v, &mut previous.x);
            }
            if let Some(v) = &patch.y {
                changed |= assign(&mut control.position.y, v, &mut previous.y);
            }
            if let (Some(v), Some(current)) = (patch.heading, control.heading()) {
                previous.heading = Some(current);
                if current != v {
                    control.set_heading(v);
                    changed = true;
                }
            }
            if let Some(v) = &patch.visible {
                changed |= assign(&mut control.visible, v, &mut previous.visible);
            }
            if let Some(v) = &patch.lock {
                changed |= assign(&mut control.lock, v, &mut previous.lock);
            }
        }
    }
    (changed, previous)
}

/// Sets properties on a list of tree items.
///
/// Consecutive updates of the same items merge into one history entry, so
/// dragging a slider or typing a name is undone in one step.
pub struct UpdatePathTreeItems {
    targets: Vec<PathTreeItem>,
    new_values: ItemPatch,
    previous: Vec<ItemPatch>,
    changed: bool,
}

impl UpdatePathTreeItems {
    pub fn new(targets: Vec<PathTreeItem>, new_values: ItemPatch) -> Self {
        Self {
            targets,
            new_values,
            previous: Vec::new(),
            changed: false,
        }
    }

    pub fn targets(&self) -> &[PathTreeItem] {
        &self.targets
    }
}

impl CancellableCommand for UpdatePathTreeItems {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        self.previous.clear();
        for item in &self.targets {
            let (changed, previous) = apply_patch(store, *item, &self.new_values);
            self.changed |= changed;
            self.previous.push(previous);
        }
        self.changed
    }

    fn undo(&mut self, store: &mut PathStore) {
        for (item, previous) in self.targets.iter().zip(&self.previous) {
            apply_patch(store, *item, previous);
        }
    }

    fn redo(&mut self, store: &mut PathStore) {
        for item in &self.targets {
            apply_patch(store, *item, &self.new_values);
        }
    }

    fn updated_items(&self) -> Option<&[PathTreeItem]> {
        Some(&self.targets)
    }

    fn as_mergeable(&mut self) -> Option<&mut dyn MergeableCommand> {
        Some(self)
    }
}

impl MergeableCommand for UpdatePathTreeItems {
    fn merge(&mut self, latest: &dyn CancellableCommand) -> bool {
        let Some(latest) = downcast::<UpdatePathTreeItems>(latest) else {
            return false;
        };
        if latest.targets != self.targets {
            return false;
        }
        // earlier previous values win, later new values win
        self.previous = latest
            .previous
            .iter()
            .zip(&self.previous)
            .map(|(late, early)| late.overlay(early))
            .collect();
        self.new_values = self.new_values.overlay(&latest.new_values);
        true
    }
}

/// Optional new ranges for a path's configuration, as `(from, to)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathConfigPatch {
    pub speed_limit: Option<(f64, f64)>,
    pub bent_rate_applicable_range: Option<(f64, f64)>,
}

/// Changes the speed limit or bent rate range of a path.
pub struct UpdatePathConfig {
    path: PathId,
    new_values: PathConfigPatch,
    previous: PathConfigPatch,
}

impl UpdatePathConfig {
    pub fn new(path: PathId, new_values: PathConfigPatch) -> Self {
        Self {
            path,
            new_values,
            previous: PathConfigPatch::default(),
        }
    }

    fn apply(store: &mut PathStore, path: PathId, patch: &PathConfigPatch) -> PathConfigPatch {
        let pc = &mut store.path_mut(path).pc;
        let mut previous = PathConfigPatch::default();
        if let Some((from, to)) = patch.speed_limit {
            previous.speed_limit = Some((pc.speed_limit.from, pc.speed_limit.to));
            pc.speed_limit.set(from, to);
        }
        if let Some((from, to)) = patch.bent_rate_applicable_range {
            let range = &mut pc.bent_rate_applicable_range;
            previous.bent_rate_applicable_range = Some((range.from, range.to));
            range.set(from, to);
        }
        previous
    }
}

impl CancellableCommand for UpdatePathConfig {
    fn execute(&mut self, store: &mut PathStore) -> bool {
        let before = store.path(self.path).pc;
        self.previous = Self::apply(store, self.path, &self.new_values);
        store.path(self.path).pc != before
    }

    fn undo(&mut self, store: &mut PathStore) {
        Self::apply(store, self.path, &self.previous);
    }

    fn redo(&mut self, store: &mut PathStore) {
        Self::apply(store, self.path, &self.new_values);
    }

    fn as_mergeable(&mut self) -> Option<&mut dyn MergeableCommand> {
        Some(self)
    }
}

impl MergeableCommand for UpdatePathConfig {
    fn merge(&mut self, latest: &dyn CancellableCommand) -> bool {
        let Some(latest) = downcast::<UpdatePathConfig>(latest) else {
            return false;
        };
        if latest.path != self.path {
            return false;
        }
        self.previous = PathConfigPatch {
            speed_limit: self.previous.speed_limit.or(latest.previous.speed_limit),
            bent_rate_applicable_range: self
                .previous
                .bent_rate_applicable_range
                .or(latest.previous.bent_rate_applicable_range),
        };
        self.new_values = PathConfigPatch {
            speed_limit: latest.new_values.speed_limit.or(self.new_values.speed_limit),
            bent_rate_applicable_range: latest
                .new_values
                .bent_rate_applicable_range
                .or(self.new_values.bent_rate_applicable_range),
        };
        true
    }
}
