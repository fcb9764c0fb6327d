//! Error types for the geometry crate.

use thiserror::Error;

/// Errors that can occur when working with transforms and CRS descriptors.
#[derive(Debug, Error)]
pub enum GeomError {
    /// The affine transform has no inverse (zero determinant).
    #[error("Transform is not invertible (determinant {determinant})")]
    NotInvertible {
        /// Determinant of the linear part of the transform.
        determinant: f64,
    },

    /// A CRS descriptor could not be parsed.
    #[error("Invalid CRS descriptor: {0}")]
    InvalidCrs(String),
}
