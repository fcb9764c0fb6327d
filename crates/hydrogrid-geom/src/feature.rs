//! Feature records consumed by the aggregation engine.

use geo::{Geometry, Point};

/// A single measurement feature: a geometry plus a scalar value.
///
/// The geometry is optional because upstream sources legitimately contain
/// records with no geometry; the engines skip those rather than failing the
/// batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature geometry in the source CRS, if any.
    pub geometry: Option<Geometry<f64>>,
    /// The measured scalar (e.g. soil moisture content).
    pub value: f64,
}

impl Feature {
    /// Create a feature with a geometry.
    pub fn new(geometry: Geometry<f64>, value: f64) -> Self {
        Self {
            geometry: Some(geometry),
            value,
        }
    }

    /// Convenience constructor for the common point-measurement case.
    pub fn point(x: f64, y: f64, value: f64) -> Self {
        Self::new(Point::new(x, y).into(), value)
    }

    /// A feature whose geometry is missing.
    pub fn without_geometry(value: f64) -> Self {
        Self {
            geometry: None,
            value,
        }
    }
}
