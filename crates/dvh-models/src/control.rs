//! Shewhart individuals-chart control limits
//!
//! Center line and 3-sigma limits for individuals (X) charts. Process
//! spread is estimated from the mean moving range rather than the raw
//! sample standard deviation, per standard individuals-chart practice.

use serde::{Deserialize, Serialize};

use crate::base::{ModelError, Result};


/// d2 bias-correction factor for subgroups of size 2 (moving ranges).
///
/// Montgomery, *Introduction to Statistical Quality Control*, Appendix
/// Table VI.
pub const MOVING_RANGE_D2: f64 = 1.128;

/// Center line and control limits for an individuals chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    /// Center line (sample mean)
    pub center_line: f64,
    /// Upper control limit
    pub ucl: f64,
    /// Lower control limit
    pub lcl: f64,
}

impl ControlLimits {
    /// Compute limits for a one-dimensional sample.
    ///
    /// UCL/LCL = mean ± 3·(mean moving range / d2). A single-point
    /// sample has no moving range, so its limits collapse onto the
    /// center line; the same happens for any constant series.
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ModelError::InsufficientData {
                n_samples: 0,
                n_predictors: 0,
            });
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::instability(
                "control_limits",
                "sample contains non-finite values",
            ));
        }

        let n = values.len() as f64;
        let center_line = values.iter().sum::<f64>() / n;

        let sigma_hat = if values.len() > 1 {
            let avg_moving_range = values
                .windows(2)
                .map(|w| (w[1] - w[0]).abs())
                .sum::<f64>()
                / (n - 1.0);
            avg_moving_range / MOVING_RANGE_D2
        } else {
            0.0
        };

        Ok(Self {
            center_line,
            ucl: center_line + 3.0 * sigma_hat,
            lcl: center_line - 3.0 * sigma_hat,
        })
    }

    /// Classify a single point.
    ///
    /// A point is out of control only when it lies strictly beyond a
    /// limit; a point exactly on a limit is in control. This keeps a
    /// constant series (UCL = LCL = center) fully in control.
    pub fn in_control(&self, value: f64) -> bool {
        !(value > self.ucl || value < self.lcl)
    }

    /// Classify every point of a series
    pub fn flag(&self, values: &[f64]) -> Vec<bool> {
        values.iter().map(|&v| self.in_control(v)).collect()
    }
}
