//! Tabular report rendering
//!
//! Produces a fixed-width text table with one row per observation. Values
//! are formatted to two decimal places and timestamps as local time in
//! `yyyy-MM-dd HH:mm:ss` form.

use crate::models::Observation;
use chrono::{DateTime, Local};

/// Sentinel returned for an empty batch
pub const NO_DATA_MESSAGE: &str = "no data available";

/// Render a batch as a fixed-width `ID | VALUE | TIMESTAMP` table
///
/// Returns [`NO_DATA_MESSAGE`] for an empty batch.
pub fn render_report(batch: &[Observation]) -> String {
    if batch.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut table = String::new();
    table.push_str("ID    | VALUE      | TIMESTAMP\n");
    table.push_str("--------------------------------------------\n");

    for obs in batch {
        table.push_str(&format!(
            "{:<5} | {:>10.2} | {}\n",
            obs.id,
            obs.value,
            format_timestamp(obs.timestamp_ms)
        ));
    }

    table
}

/// Format an epoch-milliseconds timestamp as local `yyyy-MM-dd HH:mm:ss`
fn format_timestamp(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| format!("invalid timestamp ({timestamp_ms})"))
}
