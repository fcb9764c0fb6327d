//! # hydrogrid-dem
//!
//! Elevation raster handling for the flood propagation engine.
//!
//! An [`ElevationField`] is a row-major 2-D array of `f32` elevation samples
//! with a no-data sentinel and an affine [`GeoTransform`] mapping pixel
//! indices to world coordinates. Fields can be cropped to a padded
//! area-of-interest ([`AoiBounds`]) to bound a propagation run's working
//! set, and can be loaded from north-up GeoTIFF coverages with
//! [`load_geotiff`].
//!
//! ## Example
//!
//! ```
//! use hydrogrid_dem::{ElevationField, GeoTransform};
//!
//! // A 3x3 field covering one unit per pixel, anchored at (100, 50).
//! let geo = GeoTransform::north_up(100.0, 50.0, 1.0)?;
//! let field = ElevationField::new(
//!     3,
//!     3,
//!     vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
//!     None,
//!     geo,
//! )?;
//!
//! assert_eq!(field.get(0, 0), Some(9.0));
//! let (col, row) = field.geo().world_to_pixel(102.5, 48.5);
//! assert_eq!((col, row), (2, 1));
//! # Ok::<(), hydrogrid_dem::DemError>(())
//! ```

mod error;
mod field;
mod geotiff;

pub use error::DemError;
pub use field::{AoiBounds, ElevationField, GeoTransform};
pub use geotiff::load_geotiff;

/// Result type for DEM operations.
pub type Result<T> = std::result::Result<T, DemError>;
