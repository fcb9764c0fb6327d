//! The two analysis processes.

use crate::{filter_window, GridProcessConfig, InundationConfig, Observation, Result, TimeWindow};
use geo::{Coord, Geometry, Polygon};
use hydrogrid_dem::ElevationField;
use hydrogrid_flood::{run_inundation, FloodConfig, InundationOutput};
use hydrogrid_geom::{Crs, PointTransform};
use hydrogrid_grid::{temporal_change, CellIndex, GridAggregator, GridSpec};
use tracing::{debug, warn};

/// One output record of the temporal grid change process: a cell polygon in
/// the requested output CRS and the mean change across the two windows.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    /// Identity of the cell.
    pub index: CellIndex,
    /// Cell boundary, reprojected out of the grid working CRS.
    pub polygon: Polygon<f64>,
    /// `window2 mean - window1 mean` for the cell.
    pub change: f64,
}

/// The temporal grid change output: per-cell records tagged with the CRS
/// their polygons are rendered in.
#[derive(Debug, Clone)]
pub struct ChangeSet {
    /// CRS of every record's polygon (the configured output CRS).
    pub crs: Crs,
    /// Per-cell change records, in deterministic (row, col) order.
    pub records: Vec<ChangeRecord>,
}

/// Compute the gridded change of a measurement set between two time windows.
///
/// Observations are filtered into each window (inclusive bounds), both
/// subsets are aggregated against one grid specification built from
/// `config`, and the per-cell means are differenced with zero-fill for
/// cells absent from the second window.
///
/// `transform` is the pre-resolved source→grid mapping used for binning.
/// Cell polygons are rendered in `config.output_crs`: when the output CRS
/// differs from the source CRS, pass the pre-resolved output→grid mapping
/// as `output_transform` and polygons are exported through its inverse;
/// when it is the source CRS itself, pass `None` and the binning
/// transform's inverse is used. The result carries the output CRS so
/// downstream consumers know what the polygons are expressed in.
///
/// The windows are already validated by construction ([`TimeWindow`]), so
/// the engines can never see an inverted or empty range. An empty output is
/// a legitimate result, not an error.
pub fn temporal_grid_change(
    observations: &[Observation],
    window1: &TimeWindow,
    window2: &TimeWindow,
    config: &GridProcessConfig,
    transform: Box<dyn PointTransform>,
    output_transform: Option<&dyn PointTransform>,
) -> Result<ChangeSet> {
    let spec = GridSpec::new(config.cell_size, config.origin_x, config.origin_y)?;

    let features1 = filter_window(observations, window1);
    let features2 = filter_window(observations, window2);
    debug!(
        window1 = features1.len(),
        window2 = features2.len(),
        total = observations.len(),
        "aggregating observation windows"
    );

    let aggregator = GridAggregator::new(spec, transform);
    let first = aggregator.aggregate(&features1);
    let second = aggregator.aggregate(&features2);

    let render = output_transform.unwrap_or_else(|| aggregator.transform());
    let changes = temporal_change(&first, &second)?;
    let records = changes
        .into_iter()
        .map(|change| ChangeRecord {
            index: change.index,
            polygon: first.cell_polygon_in(change.index, render),
            change: change.change,
        })
        .collect();
    Ok(ChangeSet {
        crs: config.output_crs,
        records,
    })
}

/// Run the bathtub (or steepest-descent) inundation model over the flood
/// observations within a time window.
///
/// Observations are filtered to the window, reduced to their point
/// locations (non-point or missing geometries are skipped with a
/// diagnostic), and handed to the flood engine, which crops the elevation
/// coverage to a padded AOI and propagates. Elevation problems are fatal;
/// individual unusable observations are not.
pub fn inundation_bathtub(
    observations: &[Observation],
    window: &TimeWindow,
    elevation: &ElevationField,
    config: &InundationConfig,
) -> Result<InundationOutput> {
    let features = filter_window(observations, window);

    let mut points: Vec<Coord<f64>> = Vec::with_capacity(features.len());
    for (i, feature) in features.iter().enumerate() {
        match feature.geometry.as_ref() {
            Some(Geometry::Point(point)) => points.push(point.0),
            Some(other) => {
                warn!(
                    feature = i,
                    kind = geometry_kind(other),
                    "flood observation is not a point, skipping"
                );
            }
            None => {
                warn!(feature = i, "flood observation has no geometry, skipping");
            }
        }
    }

    let flood_config = FloodConfig {
        policy: config.policy,
        aoi_padding: config.aoi_padding,
    };
    Ok(run_inundation(elevation, &points, &flood_config)?)
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
