//! Lightweight scoring helpers for CLI outputs and test checks.

use crate::error::PerceptronError;
use crate::types::{Label, PerceptronModel, Sample};

/// Compute classification accuracy in `[0, 100]` as percent.
pub fn accuracy_percentage(predictions: &[Label], labels: &[Label]) -> f64 {
    if predictions.is_empty() || predictions.len() != labels.len() {
        return 0.0;
    }

    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(pred, label)| pred == label)
        .count();

    100.0 * correct as f64 / labels.len() as f64
}

/// Classify every sample with `model` and score it against the true labels.
///
/// Returns `(percent, correct, total)`.
pub fn training_accuracy(
    model: &PerceptronModel,
    samples: &[Sample],
) -> Result<(f64, usize, usize), PerceptronError> {
    let mut predictions = Vec::with_capacity(samples.len());
    let mut labels = Vec::with_capacity(samples.len());
    for sample in samples {
        predictions.push(model.classify(&sample.features)?);
        labels.push(sample.label);
    }

    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(pred, label)| pred == label)
        .count();

    Ok((
        accuracy_percentage(&predictions, &labels),
        correct,
        samples.len(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PerceptronParameter;

    #[test]
    fn accuracy_percentage_matches_simple_case() {
        let preds = vec![Label::Positive, Label::Negative, Label::Positive];
        let labels = vec![Label::Positive, Label::Positive, Label::Positive];
        assert_eq!(accuracy_percentage(&preds, &labels), 66.66666666666667);
    }

    #[test]
    fn accuracy_percentage_zero_when_no_predictions_match() {
        let preds = vec![Label::Positive, Label::Positive];
        let labels = vec![Label::Negative, Label::Negative];
        assert_eq!(accuracy_percentage(&preds, &labels), 0.0);
    }

    #[test]
    fn accuracy_percentage_misaligned_lengths_returns_zero() {
        let percent = accuracy_percentage(&[Label::Positive, Label::Negative], &[Label::Positive]);
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn accuracy_percentage_empty_returns_zero() {
        assert_eq!(accuracy_percentage(&[], &[]), 0.0);
    }

    #[test]
    fn training_accuracy_on_a_separating_model() {
        let samples = [
            Sample::new(Label::Positive, vec![1.0, 0.0]),
            Sample::new(Label::Negative, vec![-1.0, 0.0]),
        ];
        let model = PerceptronModel {
            param: PerceptronParameter::default(),
            weights: vec![1.0, 0.0],
            converged: true,
            epochs_run: 1,
            update_count: 0,
        };
        let (percent, correct, total) = training_accuracy(&model, &samples).unwrap();
        assert_eq!(percent, 100.0);
        assert_eq!(correct, 2);
        assert_eq!(total, 2);
    }

    #[test]
    fn training_accuracy_propagates_dimension_errors() {
        let samples = [Sample::new(Label::Positive, vec![1.0, 2.0, 3.0])];
        let model = PerceptronModel {
            param: PerceptronParameter::default(),
            weights: vec![1.0, 0.0],
            converged: true,
            epochs_run: 1,
            update_count: 0,
        };
        assert!(training_accuracy(&model, &samples).is_err());
    }
}
