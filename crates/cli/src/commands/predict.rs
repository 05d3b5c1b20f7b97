//! Clean-then-predict composition

use crate::config::PipelineSettings;
use crate::output::OutputFormat;
use anyhow::Result;
use forecast_lib::{Observation, OutlierCleaner, TrendPredictor};

/// Clean the batch and print the one-step prediction
pub fn execute(batch: &[Observation], settings: PipelineSettings, format: OutputFormat) -> Result<()> {
    let cleaner = OutlierCleaner::new(settings.sigma_threshold);
    let predictor = TrendPredictor::new();

    let cleaned = cleaner.clean(batch);
    let prediction = predictor.predict(&cleaned);

    match format {
        OutputFormat::Table => {
            println!("Predicted value: {:.2}", prediction.predicted_value);
            println!("Message: {}", prediction.message);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
    }

    Ok(())
}
