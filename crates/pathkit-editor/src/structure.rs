//! Structural reconciliation between paths and their flattened item list.
//!
//! [`traversal`] flattens paths into the list the path tree shows: each path
//! followed by its controls in order, shared knots once. [`construct`] is the
//! inverse: given an edited list it rebuilds the segments of every path the
//! list mentions, reusing existing segments so keyframes survive.
//!
//! A run between two end controls must contain 0, 2 or 4 intermediate
//! controls to form a linear, cubic or quintic segment. Intermediate
//! controls before the first or after the last end control of a path are
//! dropped, as is a lone end control. Any other shape makes the whole list
//! invalid and nothing is changed.

use crate::model::{ControlId, PathId, PathStore, PathTreeItem, SegmentId};
use std::collections::HashSet;

/// Snapshot of the structure of one path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStructureMemento {
    pub path: PathId,
    pub segments: Vec<SegmentId>,
    pub controls: Vec<Vec<ControlId>>,
}

/// Flattens the given paths into tree items.
pub fn traversal(store: &PathStore, paths: &[PathId]) -> Vec<PathTreeItem> {
    let mut items = Vec::new();
    for path in paths {
        items.push(PathTreeItem::Path(*path));
        items.extend(store.path_controls(*path).into_iter().map(|c| store.item(c)));
    }
    items
}

struct PathPlan {
    path: PathId,
    segments: Vec<Vec<ControlId>>,
}

/// Validates an item list and groups it into per-path segment runs.
fn plan(store: &PathStore, items: &[PathTreeItem]) -> Option<Vec<PathPlan>> {
    let mut plans: Vec<PathPlan> = Vec::new();
    let mut seen_paths = HashSet::new();
    let mut seen_controls = HashSet::new();
    let mut knot: Option<ControlId> = None;
    let mut middle: Vec<ControlId> = Vec::new();

    for item in items {
        match *item {
            PathTreeItem::Path(path) => {
                if !seen_paths.insert(path) {
                    return None;
                }
                plans.push(PathPlan {
                    path,
                    segments: Vec::new(),
                });
                knot = None;
                middle.clear();
            }
            PathTreeItem::Control(id) | PathTreeItem::EndControl(id) => {
                let current = plans.last_mut()?;
                if !seen_controls.insert(id) {
                    return None;
                }
                if !store.control(id).is_end() {
                    // leading handles without a knot are dropped
                    if knot.is_some() {
                        middle.push(id);
                    }
                    continue;
                }
                if let Some(first) = knot {
                    if !matches!(middle.len(), 0 | 2 | 4) {
                        return None;
                    }
                    let mut controls = Vec::with_capacity(middle.len() + 2);
                    controls.push(first);
                    controls.append(&mut middle);
                    controls.push(id);
                    current.segments.push(controls);
                } else {
                    middle.clear();
                }
                knot = Some(id);
            }
        }
    }

    Some(plans)
}

/// Rebuilds the structure of every path in `items` from the list.
///
/// The first item must be a path. Returns the items that are no longer part
/// of any rebuilt path, in their original order, or `None` if the list is
/// invalid. On `None` the store is untouched.
pub fn construct(store: &mut PathStore, items: &[PathTreeItem]) -> Option<Vec<PathTreeItem>> {
    if !matches!(items.first(), Some(PathTreeItem::Path(_))) {
        return None;
    }
    let plans = plan(store, items)?;
    let paths: Vec<PathId> = plans.iter().map(|p| p.path).collect();
    let before = traversal(store, &paths);

    let mut old: Vec<(SegmentId, bool)> = paths
        .iter()
        .flat_map(|p| store.path(*p).segments().to_vec())
        .map(|s| (s, false))
        .collect();

    for plan in plans {
        let mut segments = Vec::with_capacity(plan.segments.len());
        for controls in plan.segments {
            let first = controls[0];
            let last = controls[controls.len() - 1];
            let reuse = old
                .iter()
                .position(|(s, used)| {
                    let seg = store.segment(*s);
                    !used && seg.first() == first && seg.last() == last
                })
                .or_else(|| {
                    old.iter()
                        .position(|(s, used)| !used && store.segment(*s).first() == first)
                });

            let id = match reuse {
                Some(idx) => {
                    old[idx].1 = true;
                    let id = old[idx].0;
                    store.segment_mut(id).controls = controls;
                    id
                }
                None => match store.create_segment(controls) {
                    Ok(id) => id,
                    Err(err) => {
                        tracing::error!("Failed to create segment during construct: {}", err);
                        return None;
                    }
                },
            };
            segments.push(id);
        }
        store.path_mut(plan.path).segments = segments;
    }

    let after: HashSet<PathTreeItem> = traversal(store, &paths).into_iter().collect();
    Some(before.into_iter().filter(|i| !after.contains(i)).collect())
}

/// Captures the structure of the given paths.
pub fn create_structure_memento(store: &PathStore, paths: &[PathId]) -> Vec<PathStructureMemento> {
    paths
        .iter()
        .map(|path| {
            let segments = store.path(*path).segments().to_vec();
            let controls = segments
                .iter()
                .map(|s| store.segment(*s).controls().to_vec())
                .collect();
            PathStructureMemento {
                path: *path,
                segments,
                controls,
            }
        })
        .collect()
}

/// Restores a structure captured by [`create_structure_memento`].
pub fn apply_structure_memento(store: &mut PathStore, mementos: &[PathStructureMemento]) {
    for memento in mementos {
        store.path_mut(memento.path).segments = memento.segments.clone();
        for (segment, controls) in memento.segments.iter().zip(&memento.controls) {
            store.segment_mut(*segment).controls = controls.clone();
        }
    }
}
