//! Descriptive statistics over a batch
//!
//! Six pure, order-independent reductions. None of them fail on an empty
//! batch; they degrade to documented sentinel values instead. The sentinels
//! are domain-meaningful placeholders, not errors, and are kept verbatim for
//! compatibility. New callers should prefer
//! [`crate::models::StatsSummary::from_batch`], whose `None` distinguishes
//! the empty batch without sentinel values that could be misused downstream.

use crate::models::Observation;
use std::cmp::Ordering;

/// Arithmetic mean of the values; 0.0 for an empty batch
pub fn average(batch: &[Observation]) -> f64 {
    if batch.is_empty() {
        return 0.0;
    }
    sum(batch) / batch.len() as f64
}

/// Maximum value; the most-negative representable f64 for an empty batch
pub fn max(batch: &[Observation]) -> f64 {
    batch
        .iter()
        .map(|obs| obs.value)
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(f64::MIN)
}

/// Minimum value; the most-positive representable f64 for an empty batch
pub fn min(batch: &[Observation]) -> f64 {
    batch
        .iter()
        .map(|obs| obs.value)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(f64::MAX)
}

/// Difference between max and min
///
/// The empty batch returns 0.0 explicitly. Subtracting the max/min
/// sentinels instead would produce a meaningless extreme value; the
/// special case is part of the contract.
pub fn range(batch: &[Observation]) -> f64 {
    if batch.is_empty() {
        return 0.0;
    }
    max(batch) - min(batch)
}

/// Total of all values; 0.0 for an empty batch
pub fn sum(batch: &[Observation]) -> f64 {
    batch.iter().map(|obs| obs.value).sum()
}

/// Number of observations in the batch
pub fn count(batch: &[Observation]) -> usize {
    batch.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: u32, value: f64) -> Observation {
        Observation::new(id, value, 0)
    }

    #[test]
    fn test_standard_batch() {
        let batch = vec![obs(1, 10.0), obs(2, 20.0), obs(3, 30.0)];

        assert_eq!(average(&batch), 20.0);
        assert_eq!(max(&batch), 30.0);
        assert_eq!(min(&batch), 10.0);
        assert_eq!(range(&batch), 20.0);
        assert_eq!(sum(&batch), 60.0);
        assert_eq!(count(&batch), 3);
    }

    #[test]
    fn test_empty_batch_sentinels() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(max(&[]), f64::MIN);
        assert_eq!(min(&[]), f64::MAX);
        assert_eq!(range(&[]), 0.0);
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(count(&[]), 0);
    }

    #[test]
    fn test_empty_range_is_not_derived_from_sentinels() {
        // max - min over the sentinels underflows to -infinity
        assert_ne!(range(&[]), max(&[]) - min(&[]));
    }

    #[test]
    fn test_single_observation() {
        let batch = vec![obs(1, 42.0)];

        assert_eq!(average(&batch), 42.0);
        assert_eq!(max(&batch), 42.0);
        assert_eq!(min(&batch), 42.0);
        assert_eq!(range(&batch), 0.0);
        assert_eq!(sum(&batch), 42.0);
        assert_eq!(count(&batch), 1);
    }

    #[test]
    fn test_order_independence() {
        let forward = vec![obs(1, 1.0), obs(2, 2.0), obs(3, 3.0)];
        let backward = vec![obs(3, 3.0), obs(2, 2.0), obs(1, 1.0)];

        assert_eq!(average(&forward), average(&backward));
        assert_eq!(max(&forward), max(&backward));
        assert_eq!(min(&forward), min(&backward));
        assert_eq!(range(&forward), range(&backward));
        assert_eq!(sum(&forward), sum(&backward));
    }

    #[test]
    fn test_negative_values() {
        let batch = vec![obs(1, -5.0), obs(2, -15.0), obs(3, 10.0)];

        assert_eq!(max(&batch), 10.0);
        assert_eq!(min(&batch), -15.0);
        assert_eq!(range(&batch), 25.0);
        assert!((average(&batch) - (-10.0 / 3.0)).abs() < 1e-9);
    }
}
