//! Seed pixels derived from flood observation points.

use geo::Coord;
use hydrogrid_dem::ElevationField;
use tracing::warn;

/// A seed pixel coordinate, relative to the field it was derived against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSeed {
    /// Column index.
    pub col: i64,
    /// Row index.
    pub row: i64,
}

/// Ordered set of seed pixels for a propagation run.
///
/// Duplicates are permitted; the mask's idempotent visitation absorbs
/// them. Observation points falling outside the field are dropped with a
/// diagnostic, not an error: a flood observation may legitimately fall
/// outside the cropped elevation window.
#[derive(Debug, Clone, Default)]
pub struct SeedSet {
    seeds: Vec<PixelSeed>,
    dropped: usize,
}

impl SeedSet {
    /// Map world-coordinate observation points onto a field's pixel grid.
    ///
    /// Points outside the field's bounds are dropped and counted; each drop
    /// emits a `warn` diagnostic.
    pub fn from_world_points(field: &ElevationField, points: &[Coord<f64>]) -> Self {
        let mut seeds = Vec::with_capacity(points.len());
        let mut dropped = 0;
        for point in points {
            let (col, row) = field.geo().world_to_pixel(point.x, point.y);
            if field.in_bounds(col, row) {
                seeds.push(PixelSeed { col, row });
            } else {
                warn!(
                    x = point.x,
                    y = point.y,
                    col,
                    row,
                    "observation point outside elevation window, dropping seed"
                );
                dropped += 1;
            }
        }
        Self { seeds, dropped }
    }

    /// Build a seed set directly from pixel coordinates (already validated
    /// against the target field).
    pub fn from_pixels(seeds: Vec<PixelSeed>) -> Self {
        Self { seeds, dropped: 0 }
    }

    /// The seeds, in input order.
    pub fn iter(&self) -> impl Iterator<Item = PixelSeed> + '_ {
        self.seeds.iter().copied()
    }

    /// Number of usable seeds.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// True when no observation survived mapping.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Number of observation points dropped as out of bounds.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
