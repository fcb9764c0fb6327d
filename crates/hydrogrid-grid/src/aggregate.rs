//! Feature-to-grid aggregation.

use crate::{CellIndex, GridSpec};
use geo::{BoundingRect, Intersects, Polygon};
use hydrogrid_geom::{transform_geometry, Direction, Feature, IdentityTransform, PointTransform};
use std::collections::HashMap;
use tracing::debug;

/// Mutable accumulator of the values contributed to one cell.
///
/// Kept separate from [`CellIndex`] so that map keys stay immutable while
/// values accumulate. Insertion order is irrelevant to the statistic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellAccumulator {
    values: Vec<f64>,
}

impl CellAccumulator {
    /// Append one contributed value.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Merge another accumulator's values into this one.
    pub fn merge(&mut self, other: &CellAccumulator) {
        self.values.extend_from_slice(&other.values);
    }

    /// Number of contributed values.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Arithmetic mean of the contributed values.
    ///
    /// The mean of an empty accumulator is defined as `0.0` so downstream
    /// differencing stays total.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// The raw contributed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Bins features into grid cells and accumulates their values.
///
/// The aggregator is stateless across calls: each [`aggregate`] invocation
/// builds a fresh result and shares nothing with previous passes, so one
/// aggregator can serve independent requests without coordination.
///
/// [`aggregate`]: GridAggregator::aggregate
pub struct GridAggregator {
    spec: GridSpec,
    transform: Box<dyn PointTransform>,
}

impl GridAggregator {
    /// Create an aggregator whose features arrive in a source CRS that maps
    /// into the grid CRS through `transform`.
    pub fn new(spec: GridSpec, transform: Box<dyn PointTransform>) -> Self {
        Self { spec, transform }
    }

    /// Create an aggregator for features already expressed in the grid CRS.
    pub fn without_transform(spec: GridSpec) -> Self {
        Self::new(spec, Box::new(IdentityTransform))
    }

    /// The grid specification this aggregator bins against.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// The source→grid transform this aggregator applies.
    pub fn transform(&self) -> &dyn PointTransform {
        self.transform.as_ref()
    }

    /// Aggregate a feature collection into per-cell accumulators.
    ///
    /// For each feature with a geometry:
    /// 1. transform the geometry into the grid CRS,
    /// 2. scan the inclusive `(col, row)` range covered by its bounding
    ///    rectangle (a prefilter only),
    /// 3. for every candidate cell, test true geometric intersection against
    ///    the transformed geometry, and
    /// 4. append the feature's value to each intersecting cell's accumulator.
    ///
    /// A geometry spanning several cells contributes to every cell it
    /// intersects. Features with no geometry are skipped with a diagnostic;
    /// they never fail the batch.
    pub fn aggregate(&self, features: &[Feature]) -> AggregationResult {
        let mut cells: HashMap<CellIndex, CellAccumulator> = HashMap::new();

        for (i, feature) in features.iter().enumerate() {
            let Some(geometry) = feature.geometry.as_ref() else {
                debug!(feature = i, "skipping feature with no geometry");
                continue;
            };

            let in_grid = transform_geometry(geometry, self.transform.as_ref(), Direction::Forward);
            let Some(envelope) = in_grid.bounding_rect() else {
                debug!(feature = i, "skipping feature with empty geometry");
                continue;
            };

            let start = self.spec.index_of(envelope.min().x, envelope.min().y);
            let end = self.spec.index_of(envelope.max().x, envelope.max().y);

            for col in start.col..=end.col {
                for row in start.row..=end.row {
                    let index = CellIndex::new(col, row);
                    let cell_polygon = self.spec.cell_polygon(index);
                    if in_grid.intersects(&cell_polygon) {
                        cells.entry(index).or_default().push(feature.value);
                    }
                }
            }
        }

        AggregationResult {
            spec: self.spec,
            cells,
        }
    }
}

impl std::fmt::Debug for GridAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridAggregator")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// The outcome of one aggregation pass.
///
/// Maps cell identity to its accumulator. Results from separate passes are
/// independent and are joined by [`CellIndex`], not by reference.
#[derive(Debug, Clone)]
pub struct AggregationResult {
    spec: GridSpec,
    cells: HashMap<CellIndex, CellAccumulator>,
}

impl AggregationResult {
    /// The grid specification this result was binned against.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell received a value.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a cell is populated.
    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains_key(&index)
    }

    /// Mean of a populated cell, or `None` when the cell received nothing.
    pub fn mean_of(&self, index: CellIndex) -> Option<f64> {
        self.cells.get(&index).map(CellAccumulator::mean)
    }

    /// Iterate over populated cells and their accumulators.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &CellAccumulator)> {
        self.cells.iter().map(|(index, acc)| (*index, acc))
    }

    /// Populated cell indices in deterministic (row, col) order.
    pub fn sorted_indices(&self) -> Vec<CellIndex> {
        let mut indices: Vec<CellIndex> = self.cells.keys().copied().collect();
        indices.sort_by_key(|index| (index.row, index.col));
        indices
    }

    /// Boundary polygon of a cell in the grid working CRS.
    pub fn cell_polygon(&self, index: CellIndex) -> Polygon<f64> {
        self.spec.cell_polygon(index)
    }

    /// Boundary polygon of a cell re-projected into an output CRS through
    /// the inverse of the given output→grid transform.
    ///
    /// Polygons are generated in the grid CRS and reprojected on export, so
    /// there is a single source of truth for cell geometry.
    pub fn cell_polygon_in(
        &self,
        index: CellIndex,
        transform: &dyn PointTransform,
    ) -> Polygon<f64> {
        use geo::MapCoords;
        self.spec
            .cell_polygon(index)
            .map_coords(|c| transform.inverse(c))
    }
}
