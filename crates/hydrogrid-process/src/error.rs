//! Error types for the process crate.

use thiserror::Error;

/// Errors surfaced by the analysis processes.
///
/// Window and configuration problems fail before any engine runs; engine
/// errors pass through. An empty result set is not an error: "no matching
/// data" is a legitimate outcome.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A timestamp string did not match the expected format.
    #[error("Cannot parse timestamp {value:?}: {source}")]
    BadTimestamp {
        /// The rejected input.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// A window's start time is after its end time.
    #[error("Window start {start} is after end {end}")]
    InvertedWindow {
        /// Requested start.
        start: chrono::NaiveDateTime,
        /// Requested end.
        end: chrono::NaiveDateTime,
    },

    /// A window's start time equals its end time.
    #[error("Window start equals end ({start}); the window is empty")]
    EmptyWindow {
        /// The coincident start/end.
        start: chrono::NaiveDateTime,
    },

    /// Grid configuration or differencing error.
    #[error(transparent)]
    Grid(#[from] hydrogrid_grid::GridError),

    /// Flood propagation or elevation data error.
    #[error(transparent)]
    Flood(#[from] hydrogrid_flood::FloodError),
}
