//! Error types for the flood crate.

use hydrogrid_dem::DemError;
use thiserror::Error;

/// Errors that can occur during an inundation run.
///
/// Only resource- and configuration-class failures surface here; individual
/// bad seeds (out of bounds, no-data terrain) are diagnostics and never fail
/// the run.
#[derive(Debug, Error)]
pub enum FloodError {
    /// The elevation field could not be prepared (no usable AOI window, no
    /// observation points, bad raster).
    #[error("Elevation data error: {0}")]
    Dem(#[from] DemError),

    /// A packed mask's byte buffer does not match its declared dimensions.
    #[error("Packed mask length {actual} does not match {width}x{height}")]
    PackedSizeMismatch {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
        /// Actual byte count.
        actual: usize,
    },
}
