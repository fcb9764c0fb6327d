//! Grid specification and cell addressing.

use crate::{GridError, Result};
use geo::{Coord, LineString, Polygon};
use std::fmt;

/// Immutable description of the analysis grid.
///
/// The grid is unbounded in index space; a coordinate `(x, y)` in the grid
/// working CRS lands in the cell `floor((coord - origin) / cell_size)` along
/// each axis. Anchoring the grid at an explicit origin keeps cell boundaries
/// reproducible across runs and across time windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    cell_size: f64,
    origin_x: f64,
    origin_y: f64,
}

impl GridSpec {
    /// Create a grid specification.
    ///
    /// Fails with [`GridError::InvalidCellSize`] if `cell_size` is not a
    /// positive, finite number. This is a configuration error and is
    /// rejected before any feature is processed.
    pub fn new(cell_size: f64, origin_x: f64, origin_y: f64) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize { cell_size });
        }
        Ok(Self {
            cell_size,
            origin_x,
            origin_y,
        })
    }

    /// Edge length of a cell, in grid CRS units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid anchor point.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// The cell containing a grid-CRS coordinate.
    pub fn index_of(&self, x: f64, y: f64) -> CellIndex {
        CellIndex {
            col: ((x - self.origin_x) / self.cell_size).floor() as i32,
            row: ((y - self.origin_y) / self.cell_size).floor() as i32,
        }
    }

    /// Southwest corner of a cell, in grid CRS coordinates.
    pub fn cell_min(&self, index: CellIndex) -> Coord<f64> {
        Coord {
            x: self.origin_x + index.col as f64 * self.cell_size,
            y: self.origin_y + index.row as f64 * self.cell_size,
        }
    }

    /// Boundary polygon of a cell in the grid CRS: a closed,
    /// counter-clockwise four-corner ring.
    pub fn cell_polygon(&self, index: CellIndex) -> Polygon<f64> {
        let min = self.cell_min(index);
        let size = self.cell_size;
        Polygon::new(
            LineString::from(vec![
                (min.x, min.y),
                (min.x + size, min.y),
                (min.x + size, min.y + size),
                (min.x, min.y + size),
                (min.x, min.y),
            ]),
            vec![],
        )
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {} @ ({}, {})",
            self.cell_size, self.origin_x, self.origin_y
        )
    }
}

/// Identity of a grid cell.
///
/// Two cells are the same cell iff their column and row match; accumulated
/// values play no part in identity. Indices are signed: the grid extends in
/// all directions from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Column index (west→east).
    pub col: i32,
    /// Row index (south→north).
    pub row: i32,
}

impl CellIndex {
    /// Create a cell index.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
