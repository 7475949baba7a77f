use super::{ControlId, PathId};

/// An entry of the flattened path tree shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTreeItem {
    Path(PathId),
    Control(ControlId),
    EndControl(ControlId),
}

impl PathTreeItem {
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    pub fn is_end_control(&self) -> bool {
        matches!(self, Self::EndControl(_))
    }

    pub fn path_id(&self) -> Option<PathId> {
        match self {
            Self::Path(id) => Some(*id),
            _ => None,
        }
    }

    /// The control id of either control variant.
    pub fn control_id(&self) -> Option<ControlId> {
        match self {
            Self::Control(id) | Self::EndControl(id) => Some(*id),
            Self::Path(_) => None,
        }
    }
}

impl From<PathId> for PathTreeItem {
    fn from(id: PathId) -> Self {
        Self::Path(id)
    }
}
