//! Per-path and per-document configuration.

use pathkit_core::UnitOfLength;
use serde::{Deserialize, Serialize};

/// A bounded range selected by the user, e.g. the speed limit of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min_limit: f64,
    pub max_limit: f64,
    pub step: f64,
    pub from: f64,
    pub to: f64,
}

impl NumberRange {
    pub fn new(min_limit: f64, max_limit: f64, step: f64, from: f64, to: f64) -> Self {
        Self {
            min_limit,
            max_limit,
            step,
            from,
            to,
        }
    }

    /// Clamps a value into `[min_limit, max_limit]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_limit, self.max_limit)
    }

    /// Sets `from` and `to`, clamped into the limits and ordered.
    pub fn set(&mut self, from: f64, to: f64) {
        let a = self.clamp(from);
        let b = self.clamp(to);
        self.from = a.min(b);
        self.to = a.max(b);
    }
}

/// Configuration attached to every path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    pub speed_limit: NumberRange,
    pub bent_rate_applicable_range: NumberRange,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            speed_limit: NumberRange::new(0.0, 127.0, 1.0, 20.0, 100.0),
            bent_rate_applicable_range: NumberRange::new(0.0, 4.0, 0.01, 1.4, 1.8),
        }
    }
}

/// Document-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub robot_width: f64,
    pub robot_height: f64,
    pub robot_is_holonomic: bool,
    pub show_robot: bool,
    pub uol: UnitOfLength,
    /// Distance between sampled points, in `uol`.
    pub point_density: f64,
    pub control_magnet_distance: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            robot_width: 12.0,
            robot_height: 12.0,
            robot_is_holonomic: false,
            show_robot: false,
            uol: UnitOfLength::Inch,
            point_density: 2.0,
            control_magnet_distance: 5.0 / 2.54,
        }
    }
}
