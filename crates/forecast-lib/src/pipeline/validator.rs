//! Batch validation
//!
//! Rejects batches that are empty, contain non-finite values, or carry
//! duplicate identifiers. Validation is the only failing stage in the
//! pipeline; every other stage is total.

use crate::models::Observation;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

/// Reasons a batch can fail validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The batch has zero elements where population is mandatory
    #[error("the batch cannot be empty")]
    EmptyBatch,
    /// At least one value is NaN or infinite
    #[error("invalid value (NaN or infinite) found in the batch: id {id}")]
    InvalidValue { id: u32 },
    /// At least one identifier appears more than once
    #[error("duplicate id found in the batch: {id}")]
    DuplicateId { id: u32 },
}

/// Validate a batch before it enters the pipeline
///
/// The empty check runs first and short-circuits every per-element scan.
/// The non-finite scan stops at the first offender; only the boolean
/// "any invalid" outcome is observable. Duplicate detection walks the full
/// batch with a set of seen ids and fails on the first repeat.
///
/// On success a diagnostic notice is emitted to the execution log; the
/// notice is not part of the contract.
pub fn validate(batch: &[Observation]) -> Result<(), ValidationError> {
    if batch.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    if let Some(bad) = batch.iter().find(|obs| !obs.value.is_finite()) {
        return Err(ValidationError::InvalidValue { id: bad.id });
    }

    let mut seen_ids = HashSet::with_capacity(batch.len());
    for obs in batch {
        if !seen_ids.insert(obs.id) {
            return Err(ValidationError::DuplicateId { id: obs.id });
        }
    }

    info!(
        event = "validation_passed",
        batch_size = batch.len(),
        "Validation completed, no invalid values or duplicate ids found"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: u32, value: f64) -> Observation {
        Observation::new(id, value, 0)
    }

    #[test]
    fn test_valid_batch_passes() {
        let batch = vec![obs(1, 10.5), obs(2, -50.0), obs(3, 20.0)];
        assert!(validate(&batch).is_ok());
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert_eq!(validate(&[]), Err(ValidationError::EmptyBatch));
    }

    #[test]
    fn test_nan_value_rejected() {
        let batch = vec![obs(1, 10.0), obs(2, f64::NAN), obs(3, 20.0)];
        assert_eq!(
            validate(&batch),
            Err(ValidationError::InvalidValue { id: 2 })
        );
    }

    #[test]
    fn test_infinite_value_rejected() {
        let batch = vec![obs(1, f64::INFINITY), obs(2, 5.0)];
        assert_eq!(
            validate(&batch),
            Err(ValidationError::InvalidValue { id: 1 })
        );
    }

    #[test]
    fn test_negative_infinity_rejected() {
        let batch = vec![obs(1, 1.0), obs(2, f64::NEG_INFINITY)];
        assert_eq!(
            validate(&batch),
            Err(ValidationError::InvalidValue { id: 2 })
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let batch = vec![obs(1, 10.0), obs(2, 20.0), obs(1, 30.0)];
        assert_eq!(validate(&batch), Err(ValidationError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_duplicating_any_id_fails_an_otherwise_valid_batch() {
        let valid = vec![obs(1, 10.0), obs(2, 20.0), obs(3, 30.0)];
        assert!(validate(&valid).is_ok());

        for dup in &valid {
            let mut batch = valid.clone();
            batch.push(dup.clone());
            assert_eq!(
                validate(&batch),
                Err(ValidationError::DuplicateId { id: dup.id })
            );
        }
    }

    #[test]
    fn test_empty_check_precedes_value_checks() {
        // An empty batch reports EmptyBatch, never a per-element error
        assert_eq!(validate(&[]), Err(ValidationError::EmptyBatch));
    }
}
