//! Normal probability plot of regression residuals
//!
//! Pairs the ordered residuals with theoretical standard-normal
//! quantiles at rank-based plotting positions, plus a fitted reference
//! line for visual comparison against normality.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::base::{ModelError, Result};
use dvh_core::data::Vector;

/// Coordinates of a normal probability plot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalProbPlot {
    /// Theoretical standard-normal quantiles, ascending
    pub quantiles: Vector,
    /// Observed residuals sorted ascending, index-paired with `quantiles`
    pub ordered_values: Vector,
    /// Reference-line endpoints at the extreme quantiles: (x, y) pairs
    pub trend: [(f64, f64); 2],
}

impl NormalProbPlot {
    /// Build the probability plot for a residual vector.
    ///
    /// Plotting position for rank i (zero-based) is (i + 0.5) / n.
    pub fn from_residuals(residuals: &Vector) -> Result<Self> {
        let n = residuals.len();
        if n < 2 {
            return Err(ModelError::InsufficientData {
                n_samples: n,
                n_predictors: 0,
            });
        }

        let mut ordered: Vec<f64> = residuals.to_vec();
        ordered.sort_by(|a, b| a.total_cmp(b));

        let normal = Normal::new(0.0, 1.0).map_err(|e| {
            ModelError::instability(
                "prob_plot",
                format!("failed to create normal distribution: {}", e),
            )
        })?;

        let quantiles: Vector = (0..n)
            .map(|i| normal.inverse_cdf((i as f64 + 0.5) / n as f64))
            .collect();
        let ordered_values = Vector::from(ordered);

        let trend = Self::reference_line(&quantiles, &ordered_values);

        Ok(Self {
            quantiles,
            ordered_values,
            trend,
        })
    }

    /// Simple regression of ordered values on quantiles, evaluated at
    /// the extreme quantiles.
    fn reference_line(quantiles: &Vector, ordered: &Vector) -> [(f64, f64); 2] {
        let n = quantiles.len() as f64;
        let x_mean = quantiles.sum() / n;
        let y_mean = ordered.sum() / n;

        let cov: f64 = quantiles
            .iter()
            .zip(ordered.iter())
            .map(|(&x, &y)| (x - x_mean) * (y - y_mean))
            .sum();
        let var: f64 = quantiles.iter().map(|&x| (x - x_mean).powi(2)).sum();

        // var > 0 whenever n >= 2: plotting positions are distinct.
        let slope = if var > 0.0 { cov / var } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        let x0 = quantiles[0];
        let x1 = quantiles[quantiles.len() - 1];
        [(x0, slope * x0 + intercept), (x1, slope * x1 + intercept)]
    }
}
