//! Waypoint type: a path sample with a derived heading.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// One position + heading sample along a path.
///
/// Positions are in map (pixel / cell) units. `theta` is the heading in
/// radians, CCW from +X. The smoother overwrites the heading of point `i - 1`
/// whenever it moves interior point `i`, so the last two headings are left
/// exactly as supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Heading angle in radians
    #[serde(default)]
    pub theta: f32,
}

impl Waypoint {
    /// Create a new waypoint.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Waypoint at `position` with zero heading.
    #[inline]
    pub fn from_position(position: Point2D) -> Self {
        Self::new(position.x, position.y, 0.0)
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Overwrite the position, keeping the heading.
    #[inline]
    pub fn set_position(&mut self, position: Point2D) {
        self.x = position.x;
        self.y = position.y;
    }
}

impl From<Point2D> for Waypoint {
    fn from(position: Point2D) -> Self {
        Self::from_position(position)
    }
}

/// Build a zero-heading path from bare positions.
pub fn waypoints_from_points(points: &[Point2D]) -> Vec<Waypoint> {
    points.iter().copied().map(Waypoint::from_position).collect()
}

/// Strip headings from a path.
pub fn positions(path: &[Waypoint]) -> Vec<Point2D> {
    path.iter().map(Waypoint::position).collect()
}
