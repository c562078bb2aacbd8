//! Map extent and the on-grid guard.
//!
//! [`MapBounds`] is the valid coordinate rectangle `[0, width) × [0, height)`
//! of a raster map. The smoother only uses it to *reject* updates; points are
//! never clamped or projected back onto the grid.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Immutable raster extent in cells / pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MapBounds {
    /// Number of columns (exclusive upper bound on x)
    pub width: usize,
    /// Number of rows (exclusive upper bound on y)
    pub height: usize,
}

impl MapBounds {
    /// Create bounds for a `width × height` map.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if a point lies inside the map.
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= 0.0
            && point.x < self.width as f32
            && point.y >= 0.0
            && point.y < self.height as f32
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// True iff `0 <= x < width` and `0 <= y < height`.
///
/// NaN coordinates are never on the grid.
#[inline]
pub fn is_on_grid(point: Point2D, bounds: &MapBounds) -> bool {
    bounds.contains(point)
}
