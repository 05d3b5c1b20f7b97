//! Tabular report rendering

use crate::config::PipelineSettings;
use crate::output::OutputFormat;
use anyhow::Result;
use forecast_lib::{render_report, Observation, OutlierCleaner};

/// Render the report for the cleaned (or raw) batch
pub fn execute(
    batch: &[Observation],
    raw: bool,
    settings: PipelineSettings,
    format: OutputFormat,
) -> Result<()> {
    let reported: Vec<Observation> = if raw {
        batch.to_vec()
    } else {
        OutlierCleaner::new(settings.sigma_threshold).clean(batch)
    };

    match format {
        OutputFormat::Table => println!("{}", render_report(&reported)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reported)?),
    }

    Ok(())
}
