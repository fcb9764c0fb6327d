//! Validated time windows.

use crate::{ProcessError, Result};
use chrono::NaiveDateTime;

/// Timestamp format accepted by [`TimeWindow::parse`], e.g.
/// `2024-03-01T00:00:00`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A half-ordered pair of timestamps with `start < end`, guaranteed by
/// construction.
///
/// The engines only ever receive a `TimeWindow` value, so an inverted or
/// empty window is rejected at the process boundary and can never reach
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window, rejecting `start > end` ([`ProcessError::InvertedWindow`])
    /// and `start == end` ([`ProcessError::EmptyWindow`]).
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(ProcessError::InvertedWindow { start, end });
        }
        if start == end {
            return Err(ProcessError::EmptyWindow { start });
        }
        Ok(Self { start, end })
    }

    /// Parse and validate a window from `%Y-%m-%dT%H:%M:%S` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;
        Self::new(start, end)
    }

    /// Window start (inclusive).
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Window end (inclusive).
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether a timestamp falls within the window. Both bounds are
    /// inclusive, matching the source filter's BETWEEN semantics.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        ProcessError::BadTimestamp {
            value: value.to_string(),
            source,
        }
    })
}
