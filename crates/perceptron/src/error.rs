/// Errors returned by perceptron-rs operations.
#[derive(Debug, thiserror::Error)]
pub enum PerceptronError {
    /// A training parameter or training set failed validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A feature vector's length disagrees with the established dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension established by the model or training set.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// A parse error occurred while reading a dataset file.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number where the error occurred.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
