//! Model-related error types

use thiserror::Error;

use dvh_core::data::DataError;

/// Model-related errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Data-related error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Sample too small for the requested computation
    #[error("Not enough data: {n_samples} samples for {n_predictors} predictors")]
    InsufficientData {
        /// Number of samples
        n_samples: usize,
        /// Number of predictors
        n_predictors: usize,
    },

    /// Degenerate input: the data is numerically unusable, not merely small
    #[error("Numeric instability: {message} (operation: {operation})")]
    NumericInstability {
        /// Error message
        message: String,
        /// Operation that failed
        operation: String,
    },
}

impl ModelError {
    pub(crate) fn instability(operation: &str, message: impl Into<String>) -> Self {
        ModelError::NumericInstability {
            message: message.into(),
            operation: operation.to_string(),
        }
    }
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
