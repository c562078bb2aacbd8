//! Occupancy grid storage.

use crate::core::{GridCoord, MapBounds, Point2D};
use crate::error::{MargaError, Result};

/// Binary occupancy raster in row-major order.
///
/// Cell (x, y) covers the continuous square `[x, x+1) × [y, y+1)` of the
/// map frame, so the grid extent is exactly its [`MapBounds`].
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    /// true = occupied
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an all-free grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from row-major occupancy flags.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MargaError::Grid(format!(
                "grid must be non-empty, got {}x{}",
                width, height
            )));
        }
        if cells.len() != width * height {
            return Err(MargaError::Grid(format!(
                "{}x{} grid needs {} cells, got {}",
                width,
                height,
                width * height,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse an ASCII raster: `#` is occupied, any other character is free.
    ///
    /// The first row is y = 0.
    pub fn from_ascii(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(MargaError::Grid(format!(
                    "row {} has {} columns, expected {}",
                    y, len, width
                )));
            }
            cells.extend(row.chars().map(|c| c == '#'));
        }

        Self::from_cells(width, rows.len(), cells)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The valid coordinate rectangle of this grid.
    #[inline]
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.width, self.height)
    }

    /// Check if grid coordinates are within bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Is this cell occupied? Off-grid cells are reported free.
    #[inline]
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    /// Is the cell containing this point occupied?
    #[inline]
    pub fn is_occupied_at(&self, point: Point2D) -> bool {
        self.is_occupied(GridCoord::containing(point))
    }

    /// Mark a cell occupied. Returns false if the coordinate is off-grid.
    pub fn set_occupied(&mut self, coord: GridCoord, occupied: bool) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => {
                self.cells[i] = occupied;
                true
            }
            None => false,
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over all occupied cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .map(|(i, _)| self.index_to_coord(i))
    }
}
