//! Unit conversion utilities
//!
//! Handles conversion between the length units a field may be measured in.
//! Exporters convert to inches; everything else stays in the document's unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of length used by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfLength {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
}

impl UnitOfLength {
    /// Size of one unit in millimeters.
    pub fn millimeters(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => 25.4,
            Self::Foot => 304.8,
        }
    }
}

impl Default for UnitOfLength {
    fn default() -> Self {
        Self::Inch
    }
}

impl fmt::Display for UnitOfLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeter => write!(f, "mm"),
            Self::Centimeter => write!(f, "cm"),
            Self::Meter => write!(f, "m"),
            Self::Inch => write!(f, "in"),
            Self::Foot => write!(f, "ft"),
        }
    }
}

impl FromStr for UnitOfLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeter" => Ok(Self::Millimeter),
            "cm" | "centimeter" => Ok(Self::Centimeter),
            "m" | "meter" => Ok(Self::Meter),
            "in" | "inch" => Ok(Self::Inch),
            "ft" | "foot" => Ok(Self::Foot),
            _ => Err(format!("Unknown unit of length: {}", s)),
        }
    }
}

/// Converts lengths between two units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    pub from: UnitOfLength,
    pub to: UnitOfLength,
}

impl UnitConverter {
    pub fn new(from: UnitOfLength, to: UnitOfLength) -> Self {
        Self { from, to }
    }

    /// Converts a value in `from` units into `to` units.
    pub fn from_a_to_b(&self, value: f64) -> f64 {
        value * self.from.millimeters() / self.to.millimeters()
    }

    /// Converts a value in `to` units back into `from` units.
    pub fn from_b_to_a(&self, value: f64) -> f64 {
        value * self.to.millimeters() / self.from.millimeters()
    }
}

/// Rounds to the precision shown to users (three decimals).
pub fn to_user(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
