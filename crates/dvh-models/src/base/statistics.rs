//! Statistical structures for model results

use serde::{Deserialize, Serialize};

/// Whole-model fit statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// R-squared
    pub r_squared: f64,
    /// Mean squared error (SS_res / n)
    pub mse: f64,
    /// F-statistic (multi-variable models only)
    pub f_statistic: Option<f64>,
    /// F-statistic p-value (multi-variable models only)
    pub f_p_value: Option<f64>,
    /// Model degrees of freedom (number of predictors)
    pub df_model: usize,
    /// Residual degrees of freedom (n - k - 1)
    pub df_residual: usize,
}
