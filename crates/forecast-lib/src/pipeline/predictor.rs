//! One-step trend prediction
//!
//! Fits an ordinary-least-squares line over (position, value) pairs and
//! extrapolates one step beyond the batch. Position in the batch is the
//! independent variable; timestamps play no part in the fit.

use crate::models::{Observation, PredictionResult};
use tracing::debug;

/// Message attached when the batch is too small to fit a line
pub const MSG_INSUFFICIENT_DATA: &str = "insufficient data";

/// Message attached when the forecast came from the regression
pub const MSG_LINEAR_REGRESSION: &str = "computed via linear regression";

/// Predicts the next value in a batch via ordinary least squares
#[derive(Debug, Default)]
pub struct TrendPredictor;

impl TrendPredictor {
    pub fn new() -> Self {
        Self
    }

    /// Predict the value one step past the end of the batch
    ///
    /// The i-th observation (0-based) gets independent variable x = i + 1
    /// and dependent variable y = value. Slope and intercept follow the
    /// standard sums:
    ///
    /// ```text
    /// m = (n*sum_xy - sum_x*sum_y) / (n*sum_x2 - sum_x^2)
    /// b = (sum_y - m*sum_x) / n
    /// ```
    ///
    /// Total function: an empty batch yields 0.0 with the insufficient-data
    /// message, and a single-observation batch makes the denominator exactly
    /// zero, so the returned value is non-finite. Both are documented
    /// degenerate outputs, never errors. No validity or duplicate-id check
    /// is performed here; the surrounding pipeline is expected to hand over
    /// cleaned data.
    pub fn predict(&self, batch: &[Observation]) -> PredictionResult {
        if batch.is_empty() {
            return PredictionResult {
                predicted_value: 0.0,
                message: MSG_INSUFFICIENT_DATA.to_string(),
            };
        }

        let n = batch.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;

        for (i, obs) in batch.iter().enumerate() {
            let x = (i + 1) as f64;
            let y = obs.value;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / n;

        let next_x = n + 1.0;
        let predicted_value = slope * next_x + intercept;

        debug!(
            event = "prediction_computed",
            batch_size = batch.len(),
            slope = slope,
            intercept = intercept,
            predicted_value = predicted_value,
            "Fitted regression line and extrapolated one step"
        );

        PredictionResult {
            predicted_value,
            message: MSG_LINEAR_REGRESSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_of(values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Observation::new(i as u32 + 1, v, 0))
            .collect()
    }

    #[test]
    fn test_empty_batch_returns_insufficient_data() {
        let predictor = TrendPredictor::new();
        let result = predictor.predict(&[]);

        assert_eq!(result.predicted_value, 0.0);
        assert_eq!(result.message, MSG_INSUFFICIENT_DATA);
    }

    #[test]
    fn test_perfect_line_extrapolates() {
        // x = 1,2,3 with y = 10,20,30: slope 10, intercept 0, next is 40
        let predictor = TrendPredictor::new();
        let result = predictor.predict(&batch_of(&[10.0, 20.0, 30.0]));

        assert!((result.predicted_value - 40.0).abs() < 1e-9);
        assert_eq!(result.message, MSG_LINEAR_REGRESSION);
    }

    #[test]
    fn test_flat_series_predicts_same_value() {
        let predictor = TrendPredictor::new();
        let result = predictor.predict(&batch_of(&[7.5, 7.5, 7.5, 7.5]));

        assert!((result.predicted_value - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_decreasing_series() {
        let predictor = TrendPredictor::new();
        let result = predictor.predict(&batch_of(&[30.0, 20.0, 10.0]));

        assert!((result.predicted_value - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_observation_is_degenerate_but_never_panics() {
        // n = 1 zeroes the denominator; the result is non-finite by design
        let predictor = TrendPredictor::new();
        let result = predictor.predict(&batch_of(&[42.0]));

        assert!(!result.predicted_value.is_finite());
        assert_eq!(result.message, MSG_LINEAR_REGRESSION);
    }

    #[test]
    fn test_order_matters() {
        let predictor = TrendPredictor::new();
        let ascending = predictor.predict(&batch_of(&[1.0, 2.0, 3.0]));
        let descending = predictor.predict(&batch_of(&[3.0, 2.0, 1.0]));

        assert!(ascending.predicted_value > descending.predicted_value);
    }
}
