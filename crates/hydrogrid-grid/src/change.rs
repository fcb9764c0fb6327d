//! Differencing two aggregations taken over disjoint time windows.

use crate::{AggregationResult, CellIndex, GridError, Result};
use geo::Polygon;

/// Per-cell change between two aggregation passes.
#[derive(Debug, Clone)]
pub struct CellChange {
    /// Identity of the cell.
    pub index: CellIndex,
    /// Cell boundary in the grid working CRS.
    pub polygon: Polygon<f64>,
    /// `second_mean - first_mean` for this cell.
    pub change: f64,
}

/// Compute the per-cell change from `first` to `second`.
///
/// Emits one record per cell populated in `first`, ordered by (row, col).
/// A cell absent from `second` is treated as mean `0.0` (zero-fill), not as
/// missing data, so a cell that simply received no features in the second
/// window is indistinguishable from one whose true mean is zero. That is the
/// established product behavior; revisit if "no data" ever needs to be
/// distinguished from "zero".
///
/// Both results must have been built against the same [`crate::GridSpec`];
/// differencing grids with different cell sizes or origins is a
/// configuration error.
pub fn temporal_change(
    first: &AggregationResult,
    second: &AggregationResult,
) -> Result<Vec<CellChange>> {
    if first.spec() != second.spec() {
        return Err(GridError::SpecMismatch {
            first: first.spec().to_string(),
            second: second.spec().to_string(),
        });
    }

    let mut changes = Vec::with_capacity(first.len());
    for index in first.sorted_indices() {
        let first_mean = first.mean_of(index).unwrap_or(0.0);
        let second_mean = second.mean_of(index).unwrap_or(0.0);
        changes.push(CellChange {
            index,
            polygon: first.cell_polygon(index),
            change: second_mean - first_mean,
        });
    }
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridAggregator, GridSpec};
    use approx::assert_relative_eq;
    use hydrogrid_geom::Feature;

    fn aggregator() -> GridAggregator {
        GridAggregator::without_transform(GridSpec::new(10.0, 0.0, 0.0).unwrap())
    }

    #[test]
    fn test_zero_fill_for_absent_cell() {
        // {cell: mean 50} vs {} must yield change 0 - 50 = -50.
        let agg = aggregator();
        let first = agg.aggregate(&[Feature::point(5.0, 5.0, 50.0)]);
        let second = agg.aggregate(&[]);

        let changes = temporal_change(&first, &second).unwrap();
        assert_eq!(changes.len(), 1);
        assert_relative_eq!(changes[0].change, -50.0);
    }

    #[test]
    fn test_change_is_second_minus_first() {
        let agg = aggregator();
        let first = agg.aggregate(&[Feature::point(5.0, 5.0, 50.0)]);
        let second = agg.aggregate(&[Feature::point(5.0, 5.0, 60.0)]);

        let changes = temporal_change(&first, &second).unwrap();
        assert_eq!(changes.len(), 1);
        assert_relative_eq!(changes[0].change, 10.0);
    }

    #[test]
    fn test_only_first_window_cells_reported() {
        let agg = aggregator();
        let first = agg.aggregate(&[Feature::point(5.0, 5.0, 1.0)]);
        let second = agg.aggregate(&[
            Feature::point(5.0, 5.0, 2.0),
            Feature::point(95.0, 95.0, 9.0), // not in first, not reported
        ]);

        let changes = temporal_change(&first, &second).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].index, CellIndex::new(0, 0));
    }

    #[test]
    fn test_deterministic_order() {
        let agg = aggregator();
        let features = vec![
            Feature::point(25.0, 5.0, 1.0),
            Feature::point(5.0, 25.0, 1.0),
            Feature::point(5.0, 5.0, 1.0),
            Feature::point(15.0, 5.0, 1.0),
        ];
        let first = agg.aggregate(&features);
        let second = agg.aggregate(&features);

        let changes = temporal_change(&first, &second).unwrap();
        let order: Vec<(i32, i32)> = changes.iter().map(|c| (c.index.row, c.index.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_spec_mismatch_rejected() {
        let a = GridAggregator::without_transform(GridSpec::new(10.0, 0.0, 0.0).unwrap())
            .aggregate(&[Feature::point(5.0, 5.0, 1.0)]);
        let b = GridAggregator::without_transform(GridSpec::new(20.0, 0.0, 0.0).unwrap())
            .aggregate(&[Feature::point(5.0, 5.0, 1.0)]);
        assert!(matches!(
            temporal_change(&a, &b),
            Err(GridError::SpecMismatch { .. })
        ));
    }
}
