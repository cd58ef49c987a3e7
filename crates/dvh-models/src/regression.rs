//! Ordinary least squares regression with inference diagnostics
//!
//! This module fits OLS models on aligned design matrices and exposes
//! the full diagnostic surface the charting layer consumes: coefficient
//! inference, fit statistics, residuals, and the normal-probability-plot
//! transform for residual normality checks.

pub mod ols;
pub mod probplot;


// Re-exports
pub use ols::{FitResult, Ols};
pub use probplot::NormalProbPlot;
