//! # hydrogrid-process
//!
//! The analysis processes built on top of the grid and flood engines.
//!
//! This crate is the orchestration layer: it validates time windows before
//! any engine runs, filters timestamped observations into windows, carries
//! the lifted configuration (cell size, grid origin, AOI padding, output
//! CRS), and wires the engines together:
//!
//! - [`temporal_grid_change`]: aggregate one measurement set over two
//!   disjoint time windows and report the per-cell change.
//! - [`inundation_bathtub`]: propagate flood extent from in-window
//!   observation points across an elevation field.
//!
//! Invalid input (a start time at or after its end, an unparseable
//! timestamp) is rejected here, at the boundary; the engines are never
//! invoked with an invalid window because a [`TimeWindow`] cannot be
//! constructed from one.

mod config;
mod error;
mod observation;
mod process;
mod window;

pub use config::{GridProcessConfig, InundationConfig};
pub use error::ProcessError;
pub use observation::{filter_window, Observation};
pub use process::{inundation_bathtub, temporal_grid_change, ChangeRecord, ChangeSet};
pub use window::TimeWindow;

/// Result type for process operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
