//! In-memory elevation fields and area-of-interest cropping.

use crate::{DemError, Result};
use geo::Coord;

/// Affine pixel↔world mapping for a north-up raster.
///
/// Pixel `(0, 0)` is the northwest corner; columns increase eastward and
/// rows increase southward, so `pixel_height` is negative for the usual
/// north-up orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// World X of the raster's west edge.
    pub origin_x: f64,
    /// World Y of the raster's north edge.
    pub origin_y: f64,
    /// World units per pixel along X (positive).
    pub pixel_width: f64,
    /// World units per pixel along Y (negative for north-up).
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Create a geotransform, validating the pixel dimensions.
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Result<Self> {
        if !(pixel_width.is_finite() && pixel_width > 0.0) {
            return Err(DemError::InvalidPixelSize(pixel_width));
        }
        if !(pixel_height.is_finite() && pixel_height != 0.0) {
            return Err(DemError::InvalidPixelSize(pixel_height));
        }
        Ok(Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        })
    }

    /// North-up transform with square pixels: `origin` is the northwest
    /// corner and rows advance southward.
    pub fn north_up(west: f64, north: f64, pixel_size: f64) -> Result<Self> {
        Self::new(west, north, pixel_size, -pixel_size)
    }

    /// The pixel containing a world coordinate.
    ///
    /// Indices are unclamped: coordinates outside the raster produce
    /// out-of-range indices, which the field accessors reject.
    pub fn world_to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let col = ((x - self.origin_x) / self.pixel_width).floor() as i64;
        let row = ((y - self.origin_y) / self.pixel_height).floor() as i64;
        (col, row)
    }

    /// World coordinate of a pixel's center.
    pub fn pixel_to_world(&self, col: i64, row: i64) -> (f64, f64) {
        (
            self.origin_x + (col as f64 + 0.5) * self.pixel_width,
            self.origin_y + (row as f64 + 0.5) * self.pixel_height,
        )
    }

    /// World coordinate of a pixel's northwest corner.
    pub fn pixel_to_world_corner(&self, col: i64, row: i64) -> (f64, f64) {
        (
            self.origin_x + col as f64 * self.pixel_width,
            self.origin_y + row as f64 * self.pixel_height,
        )
    }
}

/// A padded bounding box in world coordinates, used to crop a raster before
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AoiBounds {
    /// West edge.
    pub min_x: f64,
    /// South edge.
    pub min_y: f64,
    /// East edge.
    pub max_x: f64,
    /// North edge.
    pub max_y: f64,
}

impl AoiBounds {
    /// The smallest box covering `points`, expanded by `padding` on every
    /// side.
    ///
    /// Fails with [`DemError::NoPoints`] for an empty point set: an
    /// inundation run with no observations has no area of interest.
    pub fn around_points(points: &[Coord<f64>], padding: f64) -> Result<Self> {
        let first = points.first().ok_or(DemError::NoPoints)?;
        let mut bounds = AoiBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        bounds.min_x -= padding;
        bounds.min_y -= padding;
        bounds.max_x += padding;
        bounds.max_y += padding;
        Ok(bounds)
    }
}

/// A 2-D field of elevation samples with a no-data sentinel and a
/// pixel↔world mapping.
///
/// Samples are stored row-major, north to south. A sample equal to the
/// sentinel (within a small tolerance, since sentinels survive float
/// conversions imprecisely) or NaN is treated as unknown terrain: it is
/// never flooded and never used as a propagation source.
#[derive(Debug, Clone)]
pub struct ElevationField {
    width: usize,
    height: usize,
    data: Vec<f32>,
    no_data: Option<f32>,
    geo: GeoTransform,
}

/// Tolerance when comparing a sample against the no-data sentinel.
const NO_DATA_TOLERANCE: f32 = 0.001;

impl ElevationField {
    /// Create a field from row-major samples.
    pub fn new(
        width: usize,
        height: usize,
        data: Vec<f32>,
        no_data: Option<f32>,
        geo: GeoTransform,
    ) -> Result<Self> {
        if data.len() != width * height {
            return Err(DemError::DimensionMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            no_data,
            geo,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The no-data sentinel, if the raster declares one.
    pub fn no_data(&self) -> Option<f32> {
        self.no_data
    }

    /// The pixel↔world mapping.
    pub fn geo(&self) -> &GeoTransform {
        &self.geo
    }

    /// Whether a pixel index lies inside the raster.
    pub fn in_bounds(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    /// The elevation at a pixel, or `None` when the pixel is out of bounds
    /// or holds the no-data sentinel (or NaN).
    pub fn get(&self, col: i64, row: i64) -> Option<f32> {
        if !self.in_bounds(col, row) {
            return None;
        }
        let value = self.data[row as usize * self.width + col as usize];
        if value.is_nan() {
            return None;
        }
        if let Some(sentinel) = self.no_data {
            if (value - sentinel).abs() < NO_DATA_TOLERANCE {
                return None;
            }
        }
        Some(value)
    }

    /// World-space envelope of the raster.
    pub fn envelope(&self) -> AoiBounds {
        let east = self.geo.origin_x + self.width as f64 * self.geo.pixel_width;
        let south = self.geo.origin_y + self.height as f64 * self.geo.pixel_height;
        AoiBounds {
            min_x: self.geo.origin_x.min(east),
            min_y: self.geo.origin_y.min(south),
            max_x: self.geo.origin_x.max(east),
            max_y: self.geo.origin_y.max(south),
        }
    }

    /// Restrict the field to an area of interest.
    ///
    /// The AOI is clamped to the raster; the result keeps the same pixel
    /// grid, re-anchored so its `(0, 0)` is the window's northwest corner.
    /// Fails with [`DemError::EmptyCrop`] when the AOI misses the raster
    /// entirely.
    pub fn crop(&self, aoi: &AoiBounds) -> Result<ElevationField> {
        let geo = &self.geo;
        // Column window from the west/east edges.
        let col_start = ((aoi.min_x - geo.origin_x) / geo.pixel_width).floor() as i64;
        let col_end = ((aoi.max_x - geo.origin_x) / geo.pixel_width).ceil() as i64;
        // Row window from the north/south edges; pixel_height is negative,
        // so the AOI's north edge maps to the smaller row index.
        let row_start = ((aoi.max_y - geo.origin_y) / geo.pixel_height).floor() as i64;
        let row_end = ((aoi.min_y - geo.origin_y) / geo.pixel_height).ceil() as i64;

        let col_start = col_start.clamp(0, self.width as i64);
        let col_end = col_end.clamp(0, self.width as i64);
        let row_start = row_start.clamp(0, self.height as i64);
        let row_end = row_end.clamp(0, self.height as i64);

        if col_start >= col_end || row_start >= row_end {
            return Err(DemError::EmptyCrop {
                min_x: aoi.min_x,
                min_y: aoi.min_y,
                max_x: aoi.max_x,
                max_y: aoi.max_y,
            });
        }

        let out_width = (col_end - col_start) as usize;
        let out_height = (row_end - row_start) as usize;
        let mut data = Vec::with_capacity(out_width * out_height);
        for row in row_start..row_end {
            let start = row as usize * self.width + col_start as usize;
            data.extend_from_slice(&self.data[start..start + out_width]);
        }

        let (west, north) = geo.pixel_to_world_corner(col_start, row_start);
        let geo = GeoTransform {
            origin_x: west,
            origin_y: north,
            pixel_width: geo.pixel_width,
            pixel_height: geo.pixel_height,
        };

        ElevationField::new(out_width, out_height, data, self.no_data, geo)
    }
}
