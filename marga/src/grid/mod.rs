//! Occupancy grid and obstacle distance field.
//!
//! The required smoothing terms only consult the grid extent
//! ([`OccupancyGrid::bounds`]). The [`ObstacleField`] exists for the optional
//! obstacle correction term.

mod distance;
mod storage;

pub use distance::ObstacleField;
pub use storage::OccupancyGrid;
