//! Point sampling along paths
//!
//! Exporters need the path as a list of points with a target speed at each.
//! [`UniformSampler`] places points roughly `density` apart along every
//! segment and assigns the path's maximum speed to all of them.

use crate::model::{PathId, PathStore, SegmentId};
use pathkit_core::Vector;
use std::collections::HashMap;

/// A sampled point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// Curve parameter within `sample_ref`.
    pub sample_t: f64,
    pub sample_ref: SegmentId,
    /// Direction of travel in degrees.
    pub heading: f64,
}

impl SamplePoint {
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Result of sampling one path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCalculationResult {
    pub points: Vec<SamplePoint>,
}

/// Turns a path into points.
pub trait PathSampler {
    fn sample(&self, store: &PathStore, path: PathId, density: f64) -> PointCalculationResult;
}

/// Evaluates a Bezier curve of any degree at `t` (de Casteljau).
pub fn point_at(points: &[Vector], t: f64) -> Vector {
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
    }
    work.first().copied().unwrap_or(Vector::ZERO)
}

/// First derivative of a Bezier curve at `t`.
pub fn first_derivative(points: &[Vector], t: f64) -> Vector {
    if points.len() < 2 {
        return Vector::ZERO;
    }
    let degree = (points.len() - 1) as f64;
    let hodograph: Vec<Vector> = points
        .windows(2)
        .map(|w| (w[1] - w[0]) * degree)
        .collect();
    point_at(&hodograph, t)
}

/// Heading in degrees of a direction vector, 0 pointing up, clockwise.
pub fn to_heading(direction: Vector) -> f64 {
    direction.x.atan2(direction.y).to_degrees().rem_euclid(360.0)
}

/// Length of the control polygon, an upper bound of the arc length.
fn polygon_length(points: &[Vector]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Upper bound of points sampled on one segment.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;

/// Number of points for a segment of the given polygon length, at least 1.
fn sample_count(length: f64, density: f64) -> usize {
    if density.is_nan() || density <= 0.0 || !length.is_finite() {
        return 1;
    }
    let count = (length / density).ceil();
    if count >= MAX_SAMPLES_PER_SEGMENT as f64 {
        MAX_SAMPLES_PER_SEGMENT
    } else {
        (count as usize).max(1)
    }
}

/// Samples at a constant speed equal to the path's maximum speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl PathSampler for UniformSampler {
    fn sample(&self, store: &PathStore, path: PathId, density: f64) -> PointCalculationResult {
        let path_ref = store.path(path);
        let speed = path_ref.pc.speed_limit.to;
        let mut points = Vec::new();

        for segment in path_ref.segments() {
            let ctrl = store.segment_points(*segment);
            let count = sample_count(polygon_length(&ctrl), density);
            for i in 0..count {
                let t = i as f64 / count as f64;
                let p = point_at(&ctrl, t);
                points.push(SamplePoint {
                    x: p.x,
                    y: p.y,
                    speed,
                    sample_t: t,
                    sample_ref: *segment,
                    heading: to_heading(first_derivative(&ctrl, t)),
                });
            }
        }

        if let Some(last) = path_ref.last_segment() {
            let ctrl = store.segment_points(last);
            let end = store.position(store.segment(last).last());
            points.push(SamplePoint {
                x: end.x,
                y: end.y,
                speed,
                sample_t: 1.0,
                sample_ref: last,
                heading: to_heading(first_derivative(&ctrl, 1.0)),
            });
        }

        PointCalculationResult { points }
    }
}

/// Caches sampling results per path.
///
/// Entries are not invalidated automatically; call [`invalidate`](Self::invalidate)
/// after a command changes a path, or [`clear`](Self::clear) after undo/redo.
#[derive(Debug, Default)]
pub struct SampleCache {
    entries: HashMap<PathId, (f64, PointCalculationResult)>,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_sample(
        &mut self,
        sampler: &dyn PathSampler,
        store: &PathStore,
        path: PathId,
        density: f64,
    ) -> &PointCalculationResult {
        let stale = self
            .entries
            .get(&path)
            .map_or(true, |(cached_density, _)| *cached_density != density);
        if stale {
            let result = sampler.sample(store, path, density);
            self.entries.insert(path, (density, result));
        }
        &self.entries[&path].1
    }

    pub fn invalidate(&mut self, path: PathId) {
        self.entries.remove(&path);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
