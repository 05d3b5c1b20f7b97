//! Full pipeline run with sectioned output

use crate::config::PipelineSettings;
use crate::output::{
    print_observations, print_section, print_success, print_summary, print_warning, OutputFormat,
};
use anyhow::Result;
use forecast_lib::{
    render_report, Observation, PipelineOutcome, PipelineRunner, PredictionResult, StatsSummary,
};
use serde::Serialize;

/// JSON shape of a pipeline run
#[derive(Serialize)]
struct RunOutput<'a> {
    validation_error: Option<String>,
    cleaned: &'a [Observation],
    prediction: Option<&'a PredictionResult>,
    summary: Option<&'a StatsSummary>,
}

/// Run the full pipeline over the batch and print every section
pub fn execute(batch: &[Observation], settings: PipelineSettings, format: OutputFormat) -> Result<()> {
    let runner = PipelineRunner::new(settings.into());
    let outcome = runner.run(batch);

    match format {
        OutputFormat::Table => print_sections(batch, &outcome),
        OutputFormat::Json => {
            let output = RunOutput {
                validation_error: outcome.validation.as_ref().err().map(|e| e.to_string()),
                cleaned: &outcome.cleaned,
                prediction: outcome.prediction.as_ref(),
                summary: outcome.summary.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_sections(batch: &[Observation], outcome: &PipelineOutcome) {
    print_section("Section 1: Data Validation");
    match &outcome.validation {
        Ok(()) => print_success("Data validated successfully."),
        Err(err) => print_warning(&format!("Validation error: {err}")),
    }
    println!();

    print_section("Section 2: Data Cleaning");
    println!("Original data:");
    print_observations(batch);
    println!("Cleaned data:");
    print_observations(&outcome.cleaned);
    println!();

    print_section("Section 3: Prediction");
    match &outcome.prediction {
        Some(prediction) => {
            println!("Predicted value: {:.2}", prediction.predicted_value);
            println!("Message: {}", prediction.message);
        }
        None => print_warning("Pipeline stopped before the prediction stage."),
    }
    println!();

    print_section("Section 4: Tabular Report");
    println!("{}", render_report(&outcome.cleaned));

    print_section("Section 5: Data Analysis");
    match &outcome.summary {
        Some(summary) => print_summary(summary),
        None => print_warning("No data to analyze."),
    }
    println!();
}
