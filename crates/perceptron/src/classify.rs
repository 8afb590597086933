//! Classification with a learned weight vector.
//!
//! The decision rule is the sign of `w·x` against a boundary through the
//! origin: strictly positive scores map to [`Label::Positive`], everything
//! else (including an exactly-zero score) to [`Label::Negative`].

use crate::error::PerceptronError;
use crate::types::Label;

/// Dense dot product. Callers must have checked the lengths already.
#[inline]
pub(crate) fn dot(w: &[f64], x: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (wi, xi) in w.iter().zip(x.iter()) {
        sum += wi * xi;
    }
    sum
}

/// Compute the signed decision value `w·x` for a query vector.
///
/// Fails with [`PerceptronError::DimensionMismatch`] when `x` does not have
/// exactly `weights.len()` entries; vectors are never truncated or padded.
pub fn decision_value(weights: &[f64], x: &[f64]) -> Result<f64, PerceptronError> {
    if x.len() != weights.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: weights.len(),
            got: x.len(),
        });
    }
    Ok(dot(weights, x))
}

/// Classify a query vector with the given weights.
///
/// Returns [`Label::Positive`] when the decision value is strictly positive
/// and [`Label::Negative`] otherwise (see [`Label::from_decision`] for the
/// boundary case).
pub fn classify(weights: &[f64], x: &[f64]) -> Result<Label, PerceptronError> {
    Ok(Label::from_decision(decision_value(weights, x)?))
}
