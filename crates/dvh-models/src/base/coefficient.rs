//! Coefficient definition

use serde::{Deserialize, Serialize};

/// Coefficient estimate with inference statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficient {
    /// Coefficient name
    pub name: String,
    /// Coefficient estimate
    pub estimate: f64,
    /// Standard error
    pub std_error: f64,
    /// t-statistic
    pub t_stat: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Is this the intercept?
    pub is_intercept: bool,
}
