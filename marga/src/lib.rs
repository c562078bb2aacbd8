//! # Marga
//!
//! Gradient-descent trajectory smoothing for paths produced by grid planners.
//!
//! ## Overview
//!
//! A coarse search (A*, Theta*, hybrid A*) returns a jagged polyline. Marga
//! iteratively nudges its interior waypoints to reduce roughness and to keep
//! the discrete curvature under the vehicle's limit, while never letting a
//! waypoint leave the map:
//!
//! - **Smoothness term** - pulls each point toward the chord of its neighbors
//! - **Curvature term** - engages only where curvature exceeds `kappa_max`
//! - **Bounds guard** - rejects any update that would leave `[0, w) × [0, h)`
//!
//! Endpoints are pinned, the path length never changes, and the run is a fixed
//! number of passes with no hidden randomness.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{MapBounds, PathSmoother, Point2D, SmoothingConfig};
//!
//! let bounds = MapBounds::new(100, 100);
//! let smoother = PathSmoother::new(bounds, &SmoothingConfig::default());
//!
//! let path = [
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(20.0, 10.0),
//!     Point2D::new(20.0, 20.0),
//! ];
//! let smoothed = smoother.smooth_points(&path);
//!
//! assert_eq!(smoothed.len(), 3);
//! assert_eq!(smoothed[0].position(), path[0]);
//! assert_eq!(smoothed[2].position(), path[2]);
//! ```
//!
//! ## Coordinate System
//!
//! Map frame in pixels or grid cells: cell (x, y) covers `[x, x+1) × [y, y+1)`.
//! Headings are radians, CCW positive from +X.

#![warn(missing_docs)]

// Core types
pub mod core;

// Occupancy grid and obstacle distance field
pub mod grid;

// Smoothing loop and correction terms
pub mod smoothing;

// Unified configuration
pub mod config;

mod error;

// Re-export commonly used types
pub use crate::core::{GridCoord, MapBounds, Point2D, Waypoint, is_on_grid};

pub use config::MargaConfig;

pub use error::{MargaError, Result};

pub use grid::{ObstacleField, OccupancyGrid};

pub use smoothing::{
    CorrectionTerm, CurvatureTerm, ObstacleTerm, PathSmoother, SmoothingConfig, SmoothingStats,
    SmoothnessTerm,
};
