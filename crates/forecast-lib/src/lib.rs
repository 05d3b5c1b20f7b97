//! Forecast library for batch observation processing
//!
//! This crate provides the core functionality for:
//! - Batch validation (empty, non-finite, duplicate-id checks)
//! - Outlier-based cleaning
//! - One-step linear-regression prediction
//! - Descriptive statistics
//! - In-memory observation storage and tabular report rendering

pub mod models;
pub mod pipeline;
pub mod report;
pub mod store;

pub use models::{Observation, PredictionResult, StatsSummary};
pub use pipeline::{
    validate, OutlierCleaner, PipelineConfig, PipelineOutcome, PipelineRunner, TrendPredictor,
    ValidationError,
};
pub use report::render_report;
pub use store::ObservationStore;
