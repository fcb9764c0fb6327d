//! Timestamped observations and window filtering.

use crate::TimeWindow;
use chrono::NaiveDateTime;
use hydrogrid_geom::Feature;

/// A measurement feature with the time it was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// The measurement itself.
    pub feature: Feature,
    /// When the measurement was taken (UTC, naive).
    pub taken_at: NaiveDateTime,
}

impl Observation {
    /// Create an observation.
    pub fn new(feature: Feature, taken_at: NaiveDateTime) -> Self {
        Self { feature, taken_at }
    }

    /// Convenience constructor for a point measurement.
    pub fn point(x: f64, y: f64, value: f64, taken_at: NaiveDateTime) -> Self {
        Self::new(Feature::point(x, y, value), taken_at)
    }
}

/// Extract the features of observations taken within a window, preserving
/// input order. Both window bounds are inclusive.
pub fn filter_window(observations: &[Observation], window: &TimeWindow) -> Vec<Feature> {
    observations
        .iter()
        .filter(|obs| window.contains(obs.taken_at))
        .map(|obs| obs.feature.clone())
        .collect()
}
