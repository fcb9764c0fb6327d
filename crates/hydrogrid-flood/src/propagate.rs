//! Flood propagation policies and the inundation driver.

use crate::{FloodMask, PackedMask, Result, SeedSet};
use geo::Coord;
use hydrogrid_dem::{AoiBounds, ElevationField};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Offsets of the 8 grid neighbors: N, S, E, W, then the diagonals.
/// Rows increase southward.
const NEIGHBORS: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// How water expands from the seed pixels.
///
/// The two policies are materially different models and are never
/// hybridized; pick the one the product calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloodPolicy {
    /// Breadth-first connectivity flood: a pixel floods its neighbor when
    /// the neighbor's elevation is at or below its own, so water settles
    /// into every basin reachable at or below the waterline defined
    /// transitively by the seeds.
    #[default]
    Bathtub,
    /// Steepest-descent trace: from each seed, water follows the single
    /// neighbor with the greatest strictly positive elevation drop until it
    /// reaches a local minimum. A trickling path, not an area fill.
    SteepestDescent,
}

/// Configuration for an inundation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodConfig {
    /// Propagation policy.
    pub policy: FloodPolicy,
    /// Margin added on every side of the observation bounding box when
    /// cropping the elevation field, in the raster's world units.
    pub aoi_padding: f64,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            policy: FloodPolicy::Bathtub,
            aoi_padding: 0.1,
        }
    }
}

/// Grow a flood mask from the seeds under the given policy.
///
/// Pixel state is monotone: UNVISITED → FLOODED, never back. No-data pixels
/// are never flooded and never propagate; a seed sitting on no-data terrain
/// is skipped with a diagnostic, not an error.
pub fn propagate(field: &ElevationField, seeds: &SeedSet, policy: FloodPolicy) -> FloodMask {
    match policy {
        FloodPolicy::Bathtub => bathtub(field, seeds),
        FloodPolicy::SteepestDescent => steepest_descent(field, seeds),
    }
}

/// Bathtub fill: breadth-first expansion with the symmetric `<=` rule.
fn bathtub(field: &ElevationField, seeds: &SeedSet) -> FloodMask {
    let mut mask = FloodMask::new(field.width(), field.height());
    let mut queue: VecDeque<(i64, i64)> = VecDeque::new();

    for seed in seeds.iter() {
        if field.get(seed.col, seed.row).is_none() {
            warn!(
                col = seed.col,
                row = seed.row,
                "seed pixel has no elevation data, skipping"
            );
            continue;
        }
        queue.push_back((seed.col, seed.row));
    }

    while let Some((col, row)) = queue.pop_front() {
        if mask.get(col, row) {
            continue;
        }
        let Some(elevation) = field.get(col, row) else {
            continue;
        };
        mask.set(col, row);

        for (dc, dr) in NEIGHBORS {
            let (ncol, nrow) = (col + dc, row + dr);
            if mask.get(ncol, nrow) {
                continue;
            }
            if let Some(neighbor) = field.get(ncol, nrow) {
                if neighbor <= elevation {
                    queue.push_back((ncol, nrow));
                }
            }
        }
    }

    mask
}

/// Steepest-descent trace: follow the steepest strictly positive drop from
/// each seed.
fn steepest_descent(field: &ElevationField, seeds: &SeedSet) -> FloodMask {
    let mut mask = FloodMask::new(field.width(), field.height());

    for seed in seeds.iter() {
        let Some(mut elevation) = field.get(seed.col, seed.row) else {
            warn!(
                col = seed.col,
                row = seed.row,
                "seed pixel has no elevation data, skipping"
            );
            continue;
        };
        let (mut col, mut row) = (seed.col, seed.row);
        mask.set(col, row);

        loop {
            let mut best: Option<(i64, i64, f32)> = None;
            for (dc, dr) in NEIGHBORS {
                let (ncol, nrow) = (col + dc, row + dr);
                if mask.get(ncol, nrow) {
                    continue;
                }
                let Some(neighbor) = field.get(ncol, nrow) else {
                    continue;
                };
                let drop = elevation - neighbor;
                if drop > 0.0 && best.map_or(true, |(_, _, b)| drop > elevation - b) {
                    best = Some((ncol, nrow, neighbor));
                }
            }

            let Some((ncol, nrow, nelev)) = best else {
                break; // local minimum, or nothing left to step to
            };
            mask.set(ncol, nrow);
            col = ncol;
            row = nrow;
            elevation = nelev;
        }
    }

    mask
}

/// Result of a full inundation run: the cropped elevation window and the
/// mask computed over it, sharing one georeferencing envelope.
#[derive(Debug, Clone)]
pub struct InundationOutput {
    /// The elevation field restricted to the padded area of interest.
    pub field: ElevationField,
    /// Flood extent over `field`'s pixel grid.
    pub mask: FloodMask,
}

impl InundationOutput {
    /// The mask as a 1-bit packed raster.
    pub fn packed(&self) -> PackedMask {
        self.mask.to_packed()
    }

    /// World-space envelope the mask is georeferenced to.
    pub fn envelope(&self) -> AoiBounds {
        self.field.envelope()
    }
}

/// Run the full inundation pipeline for a set of observation points.
///
/// Crops `field` to a padded bounding box over the observations (bounding
/// the working set), rebases the observations into the cropped window's
/// pixel grid, and propagates. Fails when no usable elevation window exists
/// (no observations, or the AOI misses the raster); individual out-of-window
/// or no-data observations are skipped with diagnostics.
pub fn run_inundation(
    field: &ElevationField,
    points: &[Coord<f64>],
    config: &FloodConfig,
) -> Result<InundationOutput> {
    let aoi = AoiBounds::around_points(points, config.aoi_padding)?;
    let cropped = field.crop(&aoi)?;
    let seeds = SeedSet::from_world_points(&cropped, points);
    debug!(
        seeds = seeds.len(),
        dropped = seeds.dropped(),
        width = cropped.width(),
        height = cropped.height(),
        policy = ?config.policy,
        "propagating flood extent"
    );
    let mask = propagate(&cropped, &seeds, config.policy);
    Ok(InundationOutput {
        field: cropped,
        mask,
    })
}
