//! Error types for the DEM crate.

use thiserror::Error;

/// Errors that can occur when working with elevation rasters.
#[derive(Debug, Error)]
pub enum DemError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding error.
    #[error("TIFF decode error: {0}")]
    TiffDecode(#[from] tiff::TiffError),

    /// The GeoTIFF carries no usable georeferencing tags.
    #[error("GeoTIFF is missing ModelTiepoint/ModelPixelScale tags: {0}")]
    MissingGeoTag(String),

    /// The sample buffer does not match the declared raster dimensions.
    #[error("Raster data length {actual} does not match {width}x{height}")]
    DimensionMismatch {
        /// Declared width in pixels.
        width: usize,
        /// Declared height in pixels.
        height: usize,
        /// Actual sample count.
        actual: usize,
    },

    /// Pixel size must be positive and finite.
    #[error("Invalid pixel size {0}")]
    InvalidPixelSize(f64),

    /// The requested area of interest does not overlap the raster.
    #[error(
        "AOI ({min_x}, {min_y})-({max_x}, {max_y}) does not overlap the raster"
    )]
    EmptyCrop {
        /// AOI west edge.
        min_x: f64,
        /// AOI south edge.
        min_y: f64,
        /// AOI east edge.
        max_x: f64,
        /// AOI north edge.
        max_y: f64,
    },

    /// An AOI cannot be derived from an empty point set.
    #[error("Cannot compute an area of interest from zero points")]
    NoPoints,
}
