//! Obstacle distance field.
//!
//! Brushfire (BFS) wavefront seeded from every occupied cell. Each cell
//! remembers which obstacle reached it first, and its distance is the
//! Euclidean distance to that source, so the field yields both the distance
//! and the direction to the nearest obstacle.

use std::collections::VecDeque;

use super::storage::OccupancyGrid;
use crate::core::GridCoord;

/// Distance to, and location of, the nearest occupied cell for every cell.
#[derive(Clone, Debug)]
pub struct ObstacleField {
    width: usize,
    height: usize,
    /// Distance in cells; `f32::MAX` when the map has no obstacles
    distances: Vec<f32>,
    /// Nearest obstacle source per cell
    sources: Vec<Option<GridCoord>>,
}

impl ObstacleField {
    /// Build the field from an occupancy grid.
    pub fn from_grid(grid: &OccupancyGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let total_cells = width * height;

        let mut distances = vec![f32::MAX; total_cells];
        let mut sources = vec![None; total_cells];
        let mut queue = VecDeque::with_capacity(total_cells / 10 + 1);

        for coord in grid.occupied_cells() {
            let idx = coord.y as usize * width + coord.x as usize;
            distances[idx] = 0.0;
            sources[idx] = Some(coord);
            queue.push_back(coord);
        }

        let seeds = queue.len();

        while let Some(cell) = queue.pop_front() {
            let idx = cell.y as usize * width + cell.x as usize;
            let Some(source) = sources[idx] else {
                continue;
            };

            for neighbor in cell.neighbors_8() {
                let Some(n_idx) = grid.coord_to_index(neighbor) else {
                    continue;
                };

                let candidate = neighbor.distance(&source);
                if candidate < distances[n_idx] {
                    distances[n_idx] = candidate;
                    sources[n_idx] = Some(source);
                    queue.push_back(neighbor);
                }
            }
        }

        log::debug!(
            "Obstacle field built: {}x{} cells, {} obstacle seeds",
            width,
            height,
            seeds
        );

        Self {
            width,
            height,
            distances,
            sources,
        }
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
        {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Distance (cells) from `coord` to the nearest obstacle.
    ///
    /// `None` off-grid or when the map contains no obstacles.
    pub fn distance(&self, coord: GridCoord) -> Option<f32> {
        let idx = self.index(coord)?;
        self.sources[idx].map(|_| self.distances[idx])
    }

    /// The obstacle cell nearest to `coord`.
    pub fn nearest_obstacle(&self, coord: GridCoord) -> Option<GridCoord> {
        self.sources[self.index(coord)?]
    }
}
