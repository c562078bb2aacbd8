//! Core types for the marga smoothing library.
//!
//! All coordinates are in the map's own frame (pixels or grid cells), with
//! the origin at cell (0, 0):
//!
//! - [`Point2D`]: continuous position, also used as the 2D gradient type
//! - [`GridCoord`]: integer cell index
//! - [`Waypoint`]: position plus heading
//! - [`MapBounds`]: valid rectangle, with the [`is_on_grid`] guard

mod bounds;
mod point;
mod waypoint;

pub use bounds::{MapBounds, is_on_grid};
pub use point::{GridCoord, Point2D};
pub use waypoint::{Waypoint, positions, waypoints_from_points};
