//! Perceptron training.
//!
//! The trainer runs the classic online update rule: one epoch is a full pass
//! over the samples in their current order, every sample whose margin is not
//! strictly positive pulls the weights by `learning_rate * label * x`, and
//! training stops at the first update-free epoch or at the epoch limit.

use crate::classify::dot;
use crate::error::PerceptronError;
use crate::types::{check_training_set, PerceptronModel, PerceptronParameter, Sample};

/// Train a perceptron on `samples`.
///
/// Weights start at the zero vector and are updated online, so an update is
/// visible to the very next sample within the same epoch. A margin of exactly
/// zero counts as a miss; in particular the first sample of the first epoch
/// always triggers an update.
///
/// `converged = true` means a full pass produced no updates. `converged =
/// false` means `max_epochs` passes ran without one; the set may not be
/// linearly separable through the origin. Non-convergence is a reported
/// outcome, not an error.
///
/// Progress goes through the crate's quiet-gated logging (one line per epoch
/// plus a final summary); see [`crate::set_quiet`].
pub fn train(
    samples: &[Sample],
    param: &PerceptronParameter,
) -> Result<PerceptronModel, PerceptronError> {
    param.validate()?;
    let dim = check_training_set(samples)?;

    let mut weights = vec![0.0; dim];
    let mut update_count = 0usize;
    let mut epochs_run = 0usize;
    let mut converged = false;

    while epochs_run < param.max_epochs {
        epochs_run += 1;
        let mut epoch_updates = 0usize;

        for sample in samples {
            let margin = sample.label.value() * dot(&weights, &sample.features);
            if margin <= 0.0 {
                let step = param.learning_rate * sample.label.value();
                for (w, x) in weights.iter_mut().zip(&sample.features) {
                    *w += step * x;
                }
                epoch_updates += 1;
            }
        }

        update_count += epoch_updates;
        crate::info(&format!(
            "epoch {}: {} update(s)\n",
            epochs_run, epoch_updates
        ));

        if epoch_updates == 0 {
            converged = true;
            crate::info(&format!(
                "training complete in {} epoch(s) with {} update(s) (learning rate: {})\n",
                epochs_run, update_count, param.learning_rate
            ));
            break;
        }
    }

    if !converged {
        crate::info(&format!(
            "epoch limit ({}) reached without convergence\n",
            param.max_epochs
        ));
    }

    Ok(PerceptronModel {
        param: param.clone(),
        weights,
        converged,
        epochs_run,
        update_count,
    })
}
