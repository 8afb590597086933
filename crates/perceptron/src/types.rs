/// Binary class label.
///
/// The discriminants match the `±1` encoding the perceptron update rule is
/// written in: the label enters margins and updates as a signed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Label {
    /// The configured positive class (`+1`).
    Positive = 1,
    /// Every other class (`-1`).
    Negative = -1,
}

impl Label {
    /// The label as the signed multiplier used in margins and updates.
    #[inline]
    pub fn value(self) -> f64 {
        self as i8 as f64
    }

    /// Map a decision value to a label.
    ///
    /// A decision value of exactly zero maps to `Negative`. A point on the
    /// boundary carries no class information, so the tie is resolved to the
    /// negative class to keep answers deterministic.
    #[inline]
    pub fn from_decision(value: f64) -> Self {
        if value > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// A labelled dense feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Class label.
    pub label: Label,
    /// Dense feature values. Every sample in a training set must have the
    /// same length.
    pub features: Vec<f64>,
}

impl Sample {
    /// Construct a sample from a label and its feature values.
    pub fn new(label: Label, features: Vec<f64>) -> Self {
        Self { label, features }
    }

    /// Number of feature dimensions.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

/// Parameters controlling a training run.
///
/// Default values are the classic ones for this workflow: learning rate 0.01
/// and an epoch limit of 1000.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronParameter {
    /// Step size applied to every weight update.
    pub learning_rate: f64,
    /// Upper bound on full passes over the training set. Training that never
    /// reaches an update-free pass stops here with `converged = false`.
    pub max_epochs: usize,
}

impl Default for PerceptronParameter {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_epochs: 1000,
        }
    }
}

impl PerceptronParameter {
    /// Validate parameter values (independent of training data).
    ///
    /// Use [`check_training_set`] for the data-dependent checks.
    pub fn validate(&self) -> Result<(), crate::error::PerceptronError> {
        use crate::error::PerceptronError;

        if !self.learning_rate.is_finite() {
            return Err(PerceptronError::InvalidParameter(
                "learning_rate is not finite".into(),
            ));
        }

        if self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidParameter(
                "learning_rate <= 0".into(),
            ));
        }

        if self.max_epochs < 1 {
            return Err(PerceptronError::InvalidParameter("max_epochs < 1".into()));
        }

        Ok(())
    }
}

/// Pre-training check of a training set.
///
/// Returns the feature dimension shared by every sample. The empty set and
/// zero-length feature vectors are rejected up front: a zero-dimensional
/// sample leaves every margin at zero, so training would exhaust the epoch
/// budget without ever moving the weights.
pub fn check_training_set(samples: &[Sample]) -> Result<usize, crate::error::PerceptronError> {
    use crate::error::PerceptronError;

    let first = samples
        .first()
        .ok_or_else(|| PerceptronError::InvalidParameter("empty training set".into()))?;

    let dim = first.dimension();
    if dim == 0 {
        return Err(PerceptronError::InvalidParameter(
            "zero-dimensional sample".into(),
        ));
    }

    for sample in samples {
        if sample.dimension() != dim {
            return Err(PerceptronError::DimensionMismatch {
                expected: dim,
                got: sample.dimension(),
            });
        }
    }

    Ok(dim)
}

/// A trained perceptron model.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronModel {
    /// Parameters used during training.
    pub param: PerceptronParameter,
    /// Learned weight vector, one entry per feature dimension. The decision
    /// boundary passes through the origin; there is no bias term.
    pub weights: Vec<f64>,
    /// Whether training reached a full pass with zero updates.
    pub converged: bool,
    /// Number of full passes executed.
    pub epochs_run: usize,
    /// Total number of weight updates applied across all passes.
    pub update_count: usize,
}

impl PerceptronModel {
    /// Feature dimension the model was trained on.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Signed score of `x` against the learned boundary.
    pub fn decision_value(&self, x: &[f64]) -> Result<f64, crate::error::PerceptronError> {
        crate::classify::decision_value(&self.weights, x)
    }

    /// Classify `x` with the learned weights.
    pub fn classify(&self, x: &[f64]) -> Result<Label, crate::error::PerceptronError> {
        crate::classify::classify(&self.weights, x)
    }
}
