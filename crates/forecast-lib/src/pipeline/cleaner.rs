//! Outlier-based batch cleaning
//!
//! Removes statistical outliers by admitting only observations whose value
//! lies within a mean ± k·stddev band computed over the batch itself.

use crate::models::Observation;
use tracing::debug;

/// Default band width in standard deviations
const DEFAULT_SIGMA_THRESHOLD: f64 = 2.0;

/// Removes observations outside a mean ± k·stddev band
pub struct OutlierCleaner {
    /// Number of standard deviations on each side of the mean
    pub sigma_threshold: f64,
}

impl OutlierCleaner {
    /// Create a cleaner with the given band width
    pub fn new(sigma_threshold: f64) -> Self {
        Self { sigma_threshold }
    }

    /// Clean a batch by dropping outliers
    ///
    /// Total function: an empty input yields an empty output and no other
    /// input can fail. The standard deviation is the population form
    /// (denominator n, not n-1). Bounds are inclusive and survivors keep
    /// their original order.
    ///
    /// When every value is identical the deviation is zero and the band
    /// collapses to [mean, mean]; only values exactly equal to the mean
    /// survive. That collapse is intended outlier-rejection behavior and
    /// must be preserved.
    ///
    /// Cleaning does not require the batch to have passed validation.
    pub fn clean(&self, batch: &[Observation]) -> Vec<Observation> {
        if batch.is_empty() {
            return Vec::new();
        }

        let n = batch.len() as f64;
        let mean = batch.iter().map(|obs| obs.value).sum::<f64>() / n;
        let variance = batch
            .iter()
            .map(|obs| (obs.value - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        let lower_bound = mean - self.sigma_threshold * std_dev;
        let upper_bound = mean + self.sigma_threshold * std_dev;

        let cleaned: Vec<Observation> = batch
            .iter()
            .filter(|obs| obs.value >= lower_bound && obs.value <= upper_bound)
            .cloned()
            .collect();

        debug!(
            event = "batch_cleaned",
            input_size = batch.len(),
            output_size = cleaned.len(),
            mean = mean,
            std_dev = std_dev,
            "Removed observations outside the outlier band"
        );
        cleaned
    }
}

impl Default for OutlierCleaner {
    fn default() -> Self {
        Self::new(DEFAULT_SIGMA_THRESHOLD)
    }
}
