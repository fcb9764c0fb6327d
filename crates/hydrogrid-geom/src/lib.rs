//! # hydrogrid-geom
//!
//! Geometry primitives shared by the grid and flood engines.
//!
//! This crate provides:
//! - **CRS descriptors**: lightweight EPSG-code identifiers for the
//!   coordinate reference systems features and rasters are expressed in.
//! - **Point transforms**: the [`PointTransform`] trait for pre-resolved,
//!   invertible source→grid coordinate mappings, with identity and affine
//!   implementations.
//! - **Feature records**: the [`Feature`] input type consumed by the
//!   aggregation engine (a geometry plus a scalar measurement value).
//!
//! Geometry itself is the [`geo`] crate's model; this crate only adds the
//! pieces the engines need on top of it.

mod crs;
mod error;
mod feature;
mod transform;

pub use crs::Crs;
pub use error::GeomError;
pub use feature::Feature;
pub use transform::{
    transform_geometry, AffineTransform, Direction, IdentityTransform, PointTransform,
};

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
