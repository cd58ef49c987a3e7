//! Shared result types for statistical models

// Re-export core types
pub use coefficient::Coefficient;
pub use statistics::ModelStatistics;

pub use crate::error::{ModelError, Result};

pub mod coefficient;
pub mod statistics;
