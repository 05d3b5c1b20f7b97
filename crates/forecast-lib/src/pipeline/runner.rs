//! Pipeline orchestration
//!
//! Runs the fixed stage order validate -> clean -> predict -> statistics
//! over one batch. Each stage fully consumes its input before the next
//! starts; there is no shared mutable state between stages.

use super::cleaner::OutlierCleaner;
use super::predictor::TrendPredictor;
use super::validator::{self, ValidationError};
use crate::models::{Observation, PredictionResult, StatsSummary};
use tracing::{info, warn};

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Outlier band width in standard deviations (default: 2.0)
    pub sigma_threshold: f64,
    /// Whether a validation failure stops the run or is logged and skipped
    /// (default: true, matching the composition this pipeline replaces)
    pub continue_on_validation_failure: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sigma_threshold: 2.0,
            continue_on_validation_failure: true,
        }
    }
}

/// Result of one pipeline run
///
/// `prediction` is `Some` whenever the downstream stages ran, even over an
/// empty cleaned batch; it is `None` only when the policy stopped the run
/// after a validation failure. `summary` is additionally `None` when the
/// cleaned batch came out empty, since the summary has no sentinel form.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Validation verdict for the raw batch
    pub validation: Result<(), ValidationError>,
    /// Batch with outliers removed (raw batch order preserved)
    pub cleaned: Vec<Observation>,
    /// One-step forecast, when the prediction stage ran
    pub prediction: Option<PredictionResult>,
    /// Descriptive statistics, when the stage ran on a non-empty batch
    pub summary: Option<StatsSummary>,
}

/// Orchestrates the four pipeline stages over one batch
pub struct PipelineRunner {
    cleaner: OutlierCleaner,
    predictor: TrendPredictor,
    config: PipelineConfig,
}

impl PipelineRunner {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            cleaner: OutlierCleaner::new(config.sigma_threshold),
            predictor: TrendPredictor::new(),
            config,
        }
    }

    /// Run the full pipeline over a raw batch
    ///
    /// A validation failure is caught here, logged, and treated as a soft
    /// failure: with `continue_on_validation_failure` set the remaining
    /// stages still run over the raw batch. That is deliberate pipeline
    /// behavior, surfaced as an explicit policy flag instead of being
    /// hard-coded.
    pub fn run(&self, batch: &[Observation]) -> PipelineOutcome {
        let validation = validator::validate(batch);

        if let Err(ref err) = validation {
            warn!(
                event = "validation_failed",
                error = %err,
                batch_size = batch.len(),
                continuing = self.config.continue_on_validation_failure,
                "Batch failed validation"
            );
            if !self.config.continue_on_validation_failure {
                return PipelineOutcome {
                    validation,
                    cleaned: Vec::new(),
                    prediction: None,
                    summary: None,
                };
            }
        }

        let cleaned = self.cleaner.clean(batch);
        let prediction = self.predictor.predict(&cleaned);
        let summary = StatsSummary::from_batch(&cleaned);

        info!(
            event = "pipeline_complete",
            raw_size = batch.len(),
            cleaned_size = cleaned.len(),
            predicted_value = prediction.predicted_value,
            "Pipeline run complete"
        );

        PipelineOutcome {
            validation,
            cleaned,
            prediction: Some(prediction),
            summary,
        }
    }
}

impl Default for PipelineRunner {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
