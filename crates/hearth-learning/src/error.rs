//! Error types for model building and evaluation.

use thiserror::Error;

/// The main error type for learning operations.
#[derive(Error, Debug)]
pub enum LearningError {
    /// An unrecognized strategy name was requested from a selector.
    #[error("Unsupported {stage} strategy '{name}'")]
    UnsupportedStrategy { stage: &'static str, name: String },

    /// A required dataset argument has no rows or no columns.
    #[error("Input dataset is empty")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A model input column is not numeric.
    #[error("Column '{column}' is not numeric")]
    NotNumeric { column: String },

    /// An argument's structural shape does not match the expected contract.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Fitting failed on the numeric side (e.g. unsolvable normal
    /// equations).
    #[error("Training failed: {0}")]
    TrainingFailed(String),

    /// A stage produced output that violates its own declared contract.
    ///
    /// This indicates an internal bug, not caller misuse.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl LearningError {
    /// Shorthand for an unknown selector name.
    pub fn unsupported(stage: &'static str, name: impl Into<String>) -> Self {
        LearningError::UnsupportedStrategy {
            stage,
            name: name.into(),
        }
    }

    /// Shorthand for a shape mismatch.
    pub fn shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        LearningError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for learning operations.
pub type Result<T> = std::result::Result<T, LearningError>;
