//! Optional obstacle-clearance term.
//!
//! Not part of the default term set. A smoother only uses it when a caller
//! adds it explicitly, e.g. via [`PathSmoother::push_term`](super::PathSmoother::push_term).

use super::terms::CorrectionTerm;
use crate::core::{GridCoord, Point2D};
use crate::grid::ObstacleField;

/// Repels waypoints closer than `max_distance` to the nearest obstacle.
///
/// Penalty `weight * (d - max_distance)²` for `d < max_distance`, with
/// gradient `weight * 2 * (d - max_distance) * (xi - o) / d`, where `o` is the
/// nearest obstacle cell.
pub struct ObstacleTerm<'a> {
    field: &'a ObstacleField,
    weight: f32,
    max_distance: f32,
}

impl<'a> ObstacleTerm<'a> {
    /// Create an obstacle term over a precomputed distance field.
    ///
    /// # Arguments
    /// * `field` - Obstacle distance field of the map
    /// * `weight` - Term weight
    /// * `max_distance` - Clearance (cells) beyond which obstacles are ignored
    pub fn new(field: &'a ObstacleField, weight: f32, max_distance: f32) -> Self {
        Self {
            field,
            weight,
            max_distance,
        }
    }
}

impl CorrectionTerm for ObstacleTerm<'_> {
    fn name(&self) -> &str {
        "obstacle"
    }

    fn weight(&self) -> f32 {
        self.weight
    }

    fn gradient(&self, _xim1: Point2D, xi: Point2D, _xip1: Point2D) -> Point2D {
        let cell = GridCoord::containing(xi);

        let (Some(distance), Some(obstacle)) =
            (self.field.distance(cell), self.field.nearest_obstacle(cell))
        else {
            return Point2D::ZERO;
        };

        if distance >= self.max_distance {
            return Point2D::ZERO;
        }

        if distance <= 0.0 {
            log::trace!("Obstacle term zero: point {:?} inside obstacle", xi);
            return Point2D::ZERO;
        }

        let away = xi - obstacle.to_point();
        self.weight * 2.0 * (distance - self.max_distance) * away / distance
    }
}
