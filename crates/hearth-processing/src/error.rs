//! Custom error types for the preprocessing stages.
//!
//! Every public operation in this crate returns [`Result`], with
//! [`ProcessingError`] covering both caller mistakes (unknown strategy
//! names, missing columns, malformed shapes) and internal contract
//! violations.

use thiserror::Error;

/// The main error type for preprocessing operations.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// An unrecognized strategy name was requested from a selector.
    ///
    /// Raised before any data is touched; the input dataset is untouched
    /// when this surfaces.
    #[error("Unsupported {stage} strategy '{name}'")]
    UnsupportedStrategy { stage: &'static str, name: String },

    /// No ingestor is registered for the given source format.
    #[error("No ingestor available for source '{0}'")]
    UnsupportedSource(String),

    /// A required dataset argument has no rows.
    #[error("Input dataset is empty")]
    EmptyDataset,

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A numeric operation was requested on a non-numeric column.
    #[error("Column '{column}' is not numeric")]
    NotNumeric { column: String },

    /// An argument's structural shape does not match the expected contract.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// A stage produced output that violates its own declared contract.
    ///
    /// This indicates an internal bug, not caller misuse.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ProcessingError {
    /// Shorthand for an unknown selector name.
    pub fn unsupported(stage: &'static str, name: impl Into<String>) -> Self {
        ProcessingError::UnsupportedStrategy {
            stage,
            name: name.into(),
        }
    }

    /// Check if this error was caused by the caller rather than a bug.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::ContractViolation(_))
    }
}

/// Result type alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;
