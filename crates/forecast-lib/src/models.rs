//! Core data models for the forecast pipeline

use serde::{Deserialize, Serialize};

/// A single timestamped numeric observation
///
/// Observations are constructed once by the data source and never mutated.
/// Prior to validation the value may be any IEEE double, including NaN or
/// infinity; a batch that has passed validation contains only finite values
/// and pairwise distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Identifier, expected unique within a batch (not globally)
    pub id: u32,
    /// Measured value
    pub value: f64,
    /// Milliseconds since the Unix epoch; used only for display
    pub timestamp_ms: i64,
}

impl Observation {
    pub fn new(id: u32, value: f64, timestamp_ms: i64) -> Self {
        Self {
            id,
            value,
            timestamp_ms,
        }
    }
}

/// Outcome of a prediction over one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Extrapolated value; may be non-finite for degenerate regressions
    pub predicted_value: f64,
    /// Fixed message keyed to the code path that produced the result
    pub message: String,
}

/// Descriptive statistics over one batch
///
/// Holds real values only. The empty batch is represented by the `None`
/// returned from [`StatsSummary::from_batch`], never by sentinel fields;
/// callers that need the legacy sentinel contract use the free functions in
/// [`crate::pipeline::stats`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub sum: f64,
    pub count: usize,
}

impl StatsSummary {
    /// Compute all statistics for a batch, or `None` for an empty batch
    pub fn from_batch(batch: &[Observation]) -> Option<Self> {
        use crate::pipeline::stats;

        if batch.is_empty() {
            return None;
        }
        Some(Self {
            average: stats::average(batch),
            max: stats::max(batch),
            min: stats::min(batch),
            range: stats::range(batch),
            sum: stats::sum(batch),
            count: stats::count(batch),
        })
    }
}
