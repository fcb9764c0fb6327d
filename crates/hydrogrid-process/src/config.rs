//! Lifted process configuration.
//!
//! Every numeric default that used to be embedded in code (the analysis
//! cell size, the grid anchor at the national extent, the AOI padding,
//! the output CRS) lives here as explicit, deserializable configuration.

use hydrogrid_flood::FloodPolicy;
use hydrogrid_geom::Crs;
use serde::{Deserialize, Serialize};

/// Configuration for the temporal grid change process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridProcessConfig {
    /// Analysis cell edge length, in grid CRS units.
    pub cell_size: f64,
    /// Grid anchor X (western extent of the analysis region, grid CRS).
    pub origin_x: f64,
    /// Grid anchor Y (southern extent of the analysis region, grid CRS).
    pub origin_y: f64,
    /// CRS the output cell polygons are rendered in.
    pub output_crs: Crs,
}

impl Default for GridProcessConfig {
    fn default() -> Self {
        Self {
            // 5 km cells anchored at the NZ national extent in NZTM.
            cell_size: 5000.0,
            origin_x: 800_000.0,
            origin_y: 4_700_000.0,
            output_crs: Crs::WEB_MERCATOR,
        }
    }
}

/// Configuration for the inundation process.
///
/// The output mask is georeferenced to the elevation coverage's own CRS
/// (its cropped envelope), so no output CRS is configured here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InundationConfig {
    /// Propagation policy.
    pub policy: FloodPolicy,
    /// Margin added around the observation bounding box when cropping the
    /// elevation coverage, in the raster's world units (degrees for the
    /// geographic DEM).
    pub aoi_padding: f64,
}

impl Default for InundationConfig {
    fn default() -> Self {
        Self {
            policy: FloodPolicy::Bathtub,
            aoi_padding: 0.1,
        }
    }
}
