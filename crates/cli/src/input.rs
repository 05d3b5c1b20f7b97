//! Batch input loading

use anyhow::{Context, Result};
use chrono::Utc;
use forecast_lib::Observation;
use std::fs;
use std::path::Path;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Load a batch from a JSON file, or the built-in sample batch if no file
/// was given
pub fn load_batch(path: Option<&Path>) -> Result<Vec<Observation>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            let batch: Vec<Observation> = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse observations from {}", path.display()))?;
            Ok(batch)
        }
        None => Ok(sample_batch()),
    }
}

/// Demonstration batch with one extreme outlier
pub fn sample_batch() -> Vec<Observation> {
    let now = Utc::now().timestamp_millis();
    vec![
        Observation::new(1, 10.5, now),
        Observation::new(2, -50.0, now - MILLIS_PER_DAY),
        Observation::new(3, 20.0, now),
        Observation::new(4, 1000.0, now - 7 * MILLIS_PER_DAY),
        Observation::new(5, 15.0, now),
        Observation::new(6, 12.0, now),
    ]
}
