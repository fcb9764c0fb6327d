//! # hydrogrid-grid
//!
//! Spatial Aggregation Engine: bins measurement features into a fixed
//! analysis grid, accumulates values per cell, and supports differencing two
//! aggregations taken over disjoint time windows.
//!
//! ## Overview
//!
//! A [`GridSpec`] fixes the cell size and origin of an unbounded grid over a
//! projected working CRS, so cell boundaries are deterministic across runs.
//! [`GridAggregator::aggregate`] walks a feature collection, transforms each
//! geometry into the grid CRS, finds every cell the geometry truly
//! intersects, and appends the feature's value to that cell's accumulator.
//! The per-cell statistic is the arithmetic mean of the accumulated values.
//!
//! Cells are keyed by [`CellIndex`], an immutable `(col, row)` pair, and
//! the accumulated values live in a separate [`CellAccumulator`] record, so
//! equality and hashing never depend on mutating state.
//!
//! ## Example
//!
//! ```
//! use hydrogrid_geom::Feature;
//! use hydrogrid_grid::{GridAggregator, GridSpec};
//!
//! let spec = GridSpec::new(5000.0, 0.0, 0.0)?;
//! let aggregator = GridAggregator::without_transform(spec);
//!
//! let result = aggregator.aggregate(&[
//!     Feature::point(12000.0, 7000.0, 42.0),
//!     Feature::point(12500.0, 7500.0, 44.0),
//! ]);
//!
//! let index = spec.index_of(12000.0, 7000.0);
//! assert_eq!((index.col, index.row), (2, 1));
//! assert_eq!(result.mean_of(index), Some(43.0));
//! # Ok::<(), hydrogrid_grid::GridError>(())
//! ```

mod aggregate;
mod change;
mod error;
mod spec;

pub use aggregate::{AggregationResult, CellAccumulator, GridAggregator};
pub use change::{temporal_change, CellChange};
pub use error::GridError;
pub use spec::{CellIndex, GridSpec};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
