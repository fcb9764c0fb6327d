//! Error types for the grid crate.

use thiserror::Error;

/// Errors that can occur when building or comparing grids.
#[derive(Debug, Error)]
pub enum GridError {
    /// Cell size must be a positive, finite number.
    #[error("Invalid cell size {cell_size} (must be positive and finite)")]
    InvalidCellSize {
        /// The rejected cell size.
        cell_size: f64,
    },

    /// Two aggregation results were built against different grid
    /// specifications and cannot be differenced cell-by-cell.
    #[error("Grid specifications differ: {first} vs {second}")]
    SpecMismatch {
        /// Specification of the first result.
        first: String,
        /// Specification of the second result.
        second: String,
    },
}
