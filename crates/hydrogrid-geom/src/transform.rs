//! Invertible point transforms between a source CRS and the grid CRS.
//!
//! Projection resolution is a collaborator concern: by the time the engines
//! run, the source→grid mapping has already been resolved into a concrete
//! [`PointTransform`]. The engines only require that it is total and
//! invertible, so that grid-cell polygons can be rendered back in an
//! arbitrary output CRS.

use crate::{GeomError, Result};
use geo::{Coord, Geometry, MapCoords};

/// Which way to apply a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Source CRS → grid CRS.
    Forward,
    /// Grid CRS → source (or output) CRS.
    Inverse,
}

/// A pre-resolved, invertible mapping between two coordinate spaces.
///
/// Both directions are total: implementations are constructed from
/// parameters that are validated up front (a non-invertible configuration is
/// rejected at build time, not at apply time).
pub trait PointTransform: Send + Sync + std::fmt::Debug {
    /// Map a coordinate from the source space into the grid space.
    fn forward(&self, coord: Coord<f64>) -> Coord<f64>;

    /// Map a coordinate from the grid space back into the source space.
    fn inverse(&self, coord: Coord<f64>) -> Coord<f64>;

    /// Apply the transform in the given direction.
    fn apply(&self, coord: Coord<f64>, direction: Direction) -> Coord<f64> {
        match direction {
            Direction::Forward => self.forward(coord),
            Direction::Inverse => self.inverse(coord),
        }
    }
}

/// The identity transform, for features already expressed in the grid CRS.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl PointTransform for IdentityTransform {
    fn forward(&self, coord: Coord<f64>) -> Coord<f64> {
        coord
    }

    fn inverse(&self, coord: Coord<f64>) -> Coord<f64> {
        coord
    }
}

/// An affine transform `x' = a*x + b*y + c`, `y' = d*x + e*y + f`.
///
/// The inverse coefficients are computed once at construction;
/// [`AffineTransform::new`] rejects a transform whose linear part has a
/// near-zero determinant.
#[derive(Debug, Clone, Copy)]
pub struct AffineTransform {
    fwd: [f64; 6],
    inv: [f64; 6],
}

impl AffineTransform {
    /// Build an affine transform from its six forward coefficients
    /// `[a, b, c, d, e, f]`.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self> {
        let det = a * e - b * d;
        if det.abs() < f64::EPSILON || !det.is_finite() {
            return Err(GeomError::NotInvertible { determinant: det });
        }
        // Closed-form inverse of the 2x3 augmented matrix.
        let inv = [
            e / det,
            -b / det,
            (b * f - e * c) / det,
            -d / det,
            a / det,
            (d * c - a * f) / det,
        ];
        Ok(Self {
            fwd: [a, b, c, d, e, f],
            inv,
        })
    }

    /// Axis-aligned scale followed by translation.
    pub fn scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Result<Self> {
        Self::new(sx, 0.0, tx, 0.0, sy, ty)
    }

    fn apply_coeffs(coeffs: &[f64; 6], coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: coeffs[0] * coord.x + coeffs[1] * coord.y + coeffs[2],
            y: coeffs[3] * coord.x + coeffs[4] * coord.y + coeffs[5],
        }
    }
}

impl PointTransform for AffineTransform {
    fn forward(&self, coord: Coord<f64>) -> Coord<f64> {
        Self::apply_coeffs(&self.fwd, coord)
    }

    fn inverse(&self, coord: Coord<f64>) -> Coord<f64> {
        Self::apply_coeffs(&self.inv, coord)
    }
}

/// Apply a transform to every coordinate of a geometry.
pub fn transform_geometry(
    geometry: &Geometry<f64>,
    transform: &dyn PointTransform,
    direction: Direction,
) -> Geometry<f64> {
    geometry.map_coords(|c| transform.apply(c, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{point, Geometry};

    #[test]
    fn test_affine_round_trip() {
        let t = AffineTransform::new(2.0, 0.5, 100.0, -0.25, 3.0, -40.0).unwrap();
        let c = Coord { x: 12.5, y: -7.0 };
        let back = t.inverse(t.forward(c));
        assert_relative_eq!(back.x, c.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, c.y, epsilon = 1e-9);
    }

    #[test]
    fn test_singular_rejected() {
        // Second row is a multiple of the first, determinant is zero.
        let err = AffineTransform::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0).unwrap_err();
        assert!(matches!(err, GeomError::NotInvertible { .. }));
    }

    #[test]
    fn test_scale_translate() {
        let t = AffineTransform::scale_translate(2.0, 3.0, 10.0, 20.0).unwrap();
        let out = t.forward(Coord { x: 1.0, y: 1.0 });
        assert_relative_eq!(out.x, 12.0);
        assert_relative_eq!(out.y, 23.0);
    }

    #[test]
    fn test_transform_geometry() {
        let t = AffineTransform::scale_translate(1.0, 1.0, 5.0, -5.0).unwrap();
        let geom: Geometry<f64> = point!(x: 1.0, y: 2.0).into();
        let moved = transform_geometry(&geom, &t, Direction::Forward);
        match moved {
            Geometry::Point(p) => {
                assert_relative_eq!(p.x(), 6.0);
                assert_relative_eq!(p.y(), -3.0);
            }
            other => panic!("unexpected geometry: {other:?}"),
        }
    }
}
