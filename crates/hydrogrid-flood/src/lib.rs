//! # hydrogrid-flood
//!
//! Flood Propagation Engine: computes inundation extent from flood
//! observation points expanded across a digital elevation model.
//!
//! ## Overview
//!
//! Observation points are mapped onto an [`ElevationField`] as a
//! [`SeedSet`] of pixel coordinates. [`propagate`] then grows a
//! [`FloodMask`] from the seeds under one of two explicit policies:
//!
//! - [`FloodPolicy::Bathtub`], a breadth-first connectivity flood: water
//!   settles into every basin reachable through terrain at or below the
//!   waterline defined transitively by the seed elevations.
//! - [`FloodPolicy::SteepestDescent`], a single-path trace: from each seed,
//!   water trickles downhill along the steepest drop until it reaches a
//!   local minimum. Yields materially sparser masks than the bathtub fill.
//!
//! The two models are different products; [`FloodConfig`] selects one
//! explicitly and they are never hybridized.
//!
//! [`run_inundation`] is the full driver: crop the elevation field to a
//! padded area of interest around the observations, rebase the seeds into
//! the cropped window, propagate, and return the mask alongside the cropped
//! field so the output stays georeferenced. The mask exports as a 1-bit
//! packed raster via [`PackedMask`].
//!
//! [`ElevationField`]: hydrogrid_dem::ElevationField

mod error;
mod mask;
mod propagate;
mod seed;

pub use error::FloodError;
pub use mask::{FloodMask, PackedMask};
pub use propagate::{propagate, run_inundation, FloodConfig, FloodPolicy, InundationOutput};
pub use seed::{PixelSeed, SeedSet};

/// Result type for flood operations.
pub type Result<T> = std::result::Result<T, FloodError>;
