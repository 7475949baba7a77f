use super::make_uid;
use pathkit_core::Vector;

/// Index of a control in the [`PathStore`](super::PathStore) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a control is a knot or an intermediate handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    /// Interior handle of a cubic or quintic segment.
    Intermediate,
    /// Segment endpoint carrying the robot heading in degrees.
    End { heading: f64 },
}

/// A control point.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub uid: String,
    pub position: Vector,
    pub visible: bool,
    pub lock: bool,
    pub kind: ControlKind,
}

impl Control {
    /// Creates an intermediate control.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            uid: make_uid(),
            position: Vector::new(x, y),
            visible: true,
            lock: false,
            kind: ControlKind::Intermediate,
        }
    }

    /// Creates an end control (knot).
    pub fn end(x: f64, y: f64, heading: f64) -> Self {
        Self {
            kind: ControlKind::End { heading },
            ..Self::new(x, y)
        }
    }

    pub fn at(position: Vector) -> Self {
        Self::new(position.x, position.y)
    }

    pub fn end_at(position: Vector, heading: f64) -> Self {
        Self::end(position.x, position.y, heading)
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, ControlKind::End { .. })
    }

    pub fn heading(&self) -> Option<f64> {
        match self.kind {
            ControlKind::End { heading } => Some(heading),
            ControlKind::Intermediate => None,
        }
    }

    /// Sets the heading of an end control. Ignored for intermediate controls.
    pub fn set_heading(&mut self, value: f64) -> bool {
        match &mut self.kind {
            ControlKind::End { heading } => {
                *heading = value;
                true
            }
            ControlKind::Intermediate => false,
        }
    }

    /// Controls are compared by position when checking knot continuity.
    pub fn is_same_position(&self, other: &Control) -> bool {
        self.position == other.position
    }
}
