//! 2D vector primitive.
//!
//! `Vector` is a plain value type. Every operation returns a new instance;
//! controls embed one as their position.

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point or displacement on the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    pub fn multiply(self, other: Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    ///
    /// Fails when either component of `other` is zero.
    pub fn divide(self, other: Vector) -> Result<Vector, GeometryError> {
        if other.x == 0.0 || other.y == 0.0 {
            return Err(GeometryError::DivisionByZero {
                x: other.x,
                y: other.y,
            });
        }
        Ok(Vector::new(self.x / other.x, self.y / other.y))
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vector) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalize(self) -> Vector {
        let len = self.length();
        if len == 0.0 {
            Vector::ZERO
        } else {
            Vector::new(self.x / len, self.y / len)
        }
    }

    /// The point `distance` away from `self` in the direction of `other`.
    pub fn interpolate(self, other: Vector, distance: f64) -> Vector {
        self + (other - self).normalize() * distance
    }

    /// Linear blend: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        self + (other - self) * t
    }

    /// Reflects `other` about `self`.
    pub fn mirror(self, other: Vector) -> Vector {
        self * 2.0 - other
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Vector) -> Vector {
        (self + other) / 2.0
    }

    pub fn is_within_area(self, from: Vector, to: Vector) -> bool {
        self.x >= from.x && self.x <= to.x && self.y >= from.y && self.y <= to.y
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

/// Scalar division. Callers divide by non-zero constants only; use
/// [`Vector::divide`] for checked component-wise division.
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}
