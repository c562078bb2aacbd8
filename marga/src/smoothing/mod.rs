//! Gradient-descent trajectory smoothing.
//!
//! This module provides:
//!
//! - **Correction terms**: smoothness and curvature gradients behind the
//!   [`CorrectionTerm`] trait, plus an opt-in [`ObstacleTerm`]
//! - **Path smoother**: the fixed-iteration Gauss–Seidel loop with the
//!   on-grid guard
//! - **Analysis**: length, curvature and roughness measures
//!
//! ## Path Smoothing
//!
//! ```rust
//! use marga::core::{MapBounds, Point2D};
//! use marga::smoothing::{PathSmoother, SmoothingConfig};
//!
//! let smoother = PathSmoother::new(MapBounds::new(200, 200), &SmoothingConfig::default());
//! let path = [
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(20.0, 10.0),
//!     Point2D::new(20.0, 20.0),
//!     Point2D::new(30.0, 20.0),
//! ];
//! let smoothed = smoother.smooth_points(&path);
//! assert_eq!(smoothed.len(), path.len());
//! ```
//!
//! ## Obstacle Clearance (optional)
//!
//! ```rust
//! use marga::grid::{ObstacleField, OccupancyGrid};
//! use marga::smoothing::{ObstacleTerm, PathSmoother, SmoothingConfig};
//!
//! let grid = OccupancyGrid::from_ascii(&["....", ".#..", "...."]).unwrap();
//! let field = ObstacleField::from_grid(&grid);
//!
//! let mut smoother = PathSmoother::new(grid.bounds(), &SmoothingConfig::default());
//! smoother.prepend_term(Box::new(ObstacleTerm::new(&field, 0.2, 2.0)));
//! ```

pub mod analysis;
mod obstacle;
mod smoother;
mod terms;

pub use analysis::{discrete_curvatures, max_curvature, path_length, roughness};
pub use obstacle::ObstacleTerm;
pub use smoother::{PathSmoother, SmoothingConfig, SmoothingStats};
pub use terms::{CorrectionTerm, CurvatureTerm, SmoothnessTerm, curvature_term, smoothness_term};
