//! Data structures for per-study variables and cohorts
//!
//! Query results arrive as named, equal-length series of per-study
//! scalars where individual entries may be missing. This module models
//! those series explicitly and provides the alignment step that drops
//! every study with any missing entry before numeric work begins.

mod align;
mod cohort;
mod value;
mod variable;

#[cfg(test)]
mod tests;

// Re-exports
pub use align::AlignedCohort;
pub use cohort::{Cohort, CohortBuilder};
pub use value::Value;
pub use variable::Variable;

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type Vector = ndarray::Array1<f64>;
pub type Matrix = ndarray::Array2<f64>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Length mismatch: variable '{name}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Variable '{0}' not found")]
    VariableNotFound(String),

    #[error("Duplicate variable name: {0}")]
    DuplicateVariable(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Cohort has no variables")]
    EmptyCohort,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
