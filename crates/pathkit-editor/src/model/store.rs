//! Arena holding every control, segment and path of a document.
//!
//! Entities are never freed. Commands that remove something only unlink it
//! from the document, so undo can link the same id back in. Ids are plain
//! indices and are only valid for the store that issued them.

use super::{Control, ControlId, Path, PathConfig, PathId, PathTreeItem, Segment, SegmentId};
use pathkit_core::{ModelError, Vector};

/// Owns all entities and the document's path order.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    controls: Vec<Control>,
    segments: Vec<Segment>,
    paths: Vec<Path>,
    order: Vec<PathId>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_control(&mut self, control: Control) -> ControlId {
        self.controls.push(control);
        ControlId(self.controls.len() - 1)
    }

    pub fn control(&self, id: ControlId) -> &Control {
        &self.controls[id.0]
    }

    pub fn control_mut(&mut self, id: ControlId) -> &mut Control {
        &mut self.controls[id.0]
    }

    pub fn position(&self, id: ControlId) -> Vector {
        self.controls[id.0].position
    }

    pub fn set_position(&mut self, id: ControlId, position: Vector) {
        self.controls[id.0].position = position;
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    pub fn segment_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.0]
    }

    pub fn path(&self, id: PathId) -> &Path {
        &self.paths[id.0]
    }

    pub fn path_mut(&mut self, id: PathId) -> &mut Path {
        &mut self.paths[id.0]
    }

    /// Tree item for a control, tagged by its kind.
    pub fn item(&self, id: ControlId) -> PathTreeItem {
        if self.control(id).is_end() {
            PathTreeItem::EndControl(id)
        } else {
            PathTreeItem::Control(id)
        }
    }

    /// Re-tags a control item by the control's actual kind.
    pub fn normalize(&self, item: PathTreeItem) -> PathTreeItem {
        match item.control_id() {
            Some(id) => self.item(id),
            None => item,
        }
    }

    pub fn uid_of(&self, item: PathTreeItem) -> &str {
        match item {
            PathTreeItem::Path(id) => &self.path(id).uid,
            PathTreeItem::Control(id) | PathTreeItem::EndControl(id) => &self.control(id).uid,
        }
    }

    /// Creates a segment from controls already in the arena.
    pub fn create_segment(&mut self, controls: Vec<ControlId>) -> Result<SegmentId, ModelError> {
        if !matches!(controls.len(), 2 | 4 | 6) {
            return Err(ModelError::UnsupportedControlCount {
                count: controls.len(),
            });
        }
        let last = controls.len() - 1;
        for (i, id) in controls.iter().enumerate() {
            let control = self.control(*id);
            let is_knot = i == 0 || i == last;
            if is_knot && !control.is_end() {
                return Err(ModelError::NotEndControl {
                    uid: control.uid.clone(),
                });
            }
            if !is_knot && control.is_end() {
                return Err(ModelError::NotIntermediateControl {
                    uid: control.uid.clone(),
                });
            }
        }
        self.segments.push(Segment::new(controls));
        Ok(SegmentId(self.segments.len() - 1))
    }

    /// Adds the controls to the arena and creates a segment from them.
    pub fn create_segment_from(&mut self, controls: Vec<Control>) -> Result<SegmentId, ModelError> {
        let ids = controls.into_iter().map(|c| self.add_control(c)).collect();
        self.create_segment(ids)
    }

    /// Creates a path outside the document order.
    ///
    /// Consecutive segments must meet at the same knot. A segment whose
    /// first control is a different control at the same position is
    /// relinked to the shared knot.
    pub fn create_path(
        &mut self,
        pc: PathConfig,
        segments: Vec<SegmentId>,
    ) -> Result<PathId, ModelError> {
        for pair in segments.windows(2) {
            self.link_knot(pair[0], pair[1])?;
        }
        self.paths.push(Path::new(pc, segments));
        Ok(PathId(self.paths.len() - 1))
    }

    /// Creates a path and appends it to the document.
    pub fn add_path(&mut self, pc: PathConfig, segments: Vec<SegmentId>) -> Result<PathId, ModelError> {
        let id = self.create_path(pc, segments)?;
        self.order.push(id);
        Ok(id)
    }

    /// Appends a segment to a path, enforcing knot sharing.
    pub fn append_segment(&mut self, path: PathId, segment: SegmentId) -> Result<(), ModelError> {
        if let Some(last) = self.path(path).last_segment() {
            self.link_knot(last, segment)?;
        }
        self.path_mut(path).segments.push(segment);
        Ok(())
    }

    fn link_knot(&mut self, a: SegmentId, b: SegmentId) -> Result<(), ModelError> {
        let knot = self.segment(a).last();
        let first = self.segment(b).first();
        if knot == first {
            return Ok(());
        }
        let (pa, pb) = (self.position(knot), self.position(first));
        if pa != pb {
            return Err(ModelError::KnotMismatch {
                ax: pa.x,
                ay: pa.y,
                bx: pb.x,
                by: pb.y,
            });
        }
        self.segment_mut(b).controls[0] = knot;
        Ok(())
    }

    /// Paths in document order.
    pub fn paths(&self) -> &[PathId] {
        &self.order
    }

    pub(crate) fn paths_mut(&mut self) -> &mut Vec<PathId> {
        &mut self.order
    }

    pub fn contains_path(&self, path: PathId) -> bool {
        self.order.contains(&path)
    }

    /// Controls of a path in order, shared knots listed once.
    pub fn path_controls(&self, path: PathId) -> Vec<ControlId> {
        let mut out: Vec<ControlId> = Vec::new();
        for segment in self.path(path).segments() {
            for control in self.segment(*segment).controls() {
                if out.last() != Some(control) {
                    out.push(*control);
                }
            }
        }
        out
    }

    pub fn segment_index(&self, path: PathId, segment: SegmentId) -> Option<usize> {
        self.path(path).segments().iter().position(|s| *s == segment)
    }

    pub fn segment_points(&self, segment: SegmentId) -> Vec<Vector> {
        self.segment(segment)
            .controls()
            .iter()
            .map(|c| self.position(*c))
            .collect()
    }

    /// Looks up a path or control of the document by uid.
    pub fn find_by_uid(&self, uid: &str) -> Option<PathTreeItem> {
        for path in &self.order {
            if self.path(*path).uid == uid {
                return Some(PathTreeItem::Path(*path));
            }
            if let Some(id) = self
                .path_controls(*path)
                .into_iter()
                .find(|c| self.control(*c).uid == uid)
            {
                return Some(self.item(id));
            }
        }
        None
    }

    /// Number of controls ever allocated.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Number of segments ever allocated.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
