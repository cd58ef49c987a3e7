//! Ordinary Least Squares (OLS) estimation
//!
//! Fits intercept-plus-slopes linear models via an SVD least-squares
//! solve and derives classic OLS inference from the residual variance
//! and `(XᵀX)⁻¹`.

use ndarray::{concatenate, Axis};
use ndarray_linalg::{Inverse, LeastSquaresSvd};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::base::{Coefficient, ModelError, ModelStatistics, Result};
use crate::regression::probplot::NormalProbPlot;
use dvh_core::data::{DataError, Matrix, Vector};

/// OLS fitting entry point
pub struct Ols;

/// Immutable result of one OLS fit.
///
/// Coefficient-indexed vectors (`std_errors`, `t_stats`, `p_values`)
/// have length k + 1 with the intercept first, matching the order of
/// `intercept` followed by `slopes`.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Intercept estimate
    pub intercept: f64,
    /// Slope estimates, one per design-matrix column
    pub slopes: Vector,
    /// Standard errors (intercept first)
    pub std_errors: Vector,
    /// t-statistics (intercept first)
    pub t_stats: Vector,
    /// Two-sided p-values (intercept first)
    pub p_values: Vector,
    /// Fitted values ŷ
    pub predictions: Vector,
    /// Residuals y − ŷ
    pub residuals: Vector,
    /// Normal probability plot of the residuals
    pub prob_plot: NormalProbPlot,
    /// Whole-model statistics
    pub statistics: ModelStatistics,
}

impl Ols {
    /// Fit an OLS model to a design matrix and response vector.
    ///
    /// Requires strictly more samples than coefficients (n > k + 1);
    /// the minimum determined system n = k + 1 is rejected as
    /// insufficient data. Non-finite entries and degenerate inputs
    /// (constant response, singular XᵀX) are numeric-instability
    /// errors so callers can tell "not enough data" from "bad data".
    pub fn fit(x: &Matrix, y: &Vector) -> Result<FitResult> {
        let n = x.nrows();
        let k = x.ncols();

        if y.len() != n {
            return Err(ModelError::Data(DataError::DimensionMismatch {
                expected: format!("{} responses", n),
                actual: format!("{} responses", y.len()),
            }));
        }

        if k == 0 || n <= k + 1 {
            return Err(ModelError::InsufficientData {
                n_samples: n,
                n_predictors: k,
            });
        }

        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(ModelError::instability(
                "fit",
                "design matrix or response contains non-finite values",
            ));
        }

        // Intercept-augmented design matrix [1 | X]
        let ones = Matrix::ones((n, 1));
        let xa = concatenate(Axis(1), &[ones.view(), x.view()]).map_err(|e| {
            ModelError::instability("fit", format!("failed to augment design matrix: {}", e))
        })?;

        let params = Self::svd_solve(&xa, y)?;
        let intercept = params[0];
        let slopes = params.slice(ndarray::s![1..]).to_owned();

        let predictions = xa.dot(&params);
        let residuals = y - &predictions;

        let rss = residuals.mapv(|r| r * r).sum();
        let y_mean = y.mean().unwrap_or(0.0);
        let tss = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum::<f64>();

        if tss < 1e-12 {
            return Err(ModelError::instability("fit", "response has zero variance"));
        }

        let r_squared = 1.0 - rss / tss;
        let mse = rss / n as f64;
        let df_residual = n - k - 1;

        let std_errors = Self::standard_errors(&xa, rss, df_residual)?;
        let (t_stats, p_values) = Self::coefficient_inference(&params, &std_errors, df_residual)?;

        // Overall F-test only applies to the multi-variable case.
        let (f_statistic, f_p_value) = if k > 1 {
            let (f, p) = Self::f_statistic(rss, tss, k, df_residual)?;
            (Some(f), Some(p))
        } else {
            (None, None)
        };

        let prob_plot = NormalProbPlot::from_residuals(&residuals)?;

        Ok(FitResult {
            intercept,
            slopes,
            std_errors,
            t_stats,
            p_values,
            predictions,
            residuals,
            prob_plot,
            statistics: ModelStatistics {
                r_squared,
                mse,
                f_statistic,
                f_p_value,
                df_model: k,
                df_residual,
            },
        })
    }

    /// Solve the least-squares system via SVD (numerically stable)
    fn svd_solve(xa: &Matrix, y: &Vector) -> Result<Vector> {
        xa.least_squares(y)
            .map_err(|e| ModelError::instability("svd_solve", format!("SVD least squares failed: {}", e)))
            .map(|ls| ls.solution)
    }

    /// Standard errors from σ̂²·diag((XᵀX)⁻¹)
    fn standard_errors(xa: &Matrix, rss: f64, df_residual: usize) -> Result<Vector> {
        let xtx = xa.t().dot(xa);
        let xtx_inv = xtx.inv().map_err(|e| {
            ModelError::instability("standard_errors", format!("failed to invert X'X: {}", e))
        })?;

        let sigma2 = rss / df_residual as f64;
        let std_errors = xtx_inv.diag().mapv(|v| (v * sigma2).sqrt().max(1e-10));

        Ok(std_errors)
    }

    /// Per-coefficient t-statistics and two-sided p-values
    fn coefficient_inference(
        params: &Vector,
        std_errors: &Vector,
        df_residual: usize,
    ) -> Result<(Vector, Vector)> {
        let t_stats: Vector = params
            .iter()
            .zip(std_errors.iter())
            .map(|(&coef, &se)| coef / se)
            .collect();

        let t_dist = StudentsT::new(0.0, 1.0, df_residual as f64).map_err(|e| {
            ModelError::instability(
                "coefficient_inference",
                format!("failed to create t-distribution: {}", e),
            )
        })?;

        let p_values: Vector = t_stats
            .iter()
            .map(|&t| {
                let p = 2.0 * (1.0 - t_dist.cdf(t.abs()));
                p.clamp(0.0, 1.0)
            })
            .collect();

        Ok((t_stats, p_values))
    }

    /// Overall F-statistic and its p-value
    fn f_statistic(rss: f64, tss: f64, k: usize, df_residual: usize) -> Result<(f64, f64)> {
        let ess = tss - rss;
        let f = (ess / k as f64) / (rss / df_residual as f64);

        let f_dist = FisherSnedecor::new(k as f64, df_residual as f64).map_err(|e| {
            ModelError::instability("f_statistic", format!("failed to create F-distribution: {}", e))
        })?;

        Ok((f, 1.0 - f_dist.cdf(f)))
    }
}

impl FitResult {
    /// Evaluate the fitted model on a new design matrix.
    ///
    /// `x_new` must have the same number of columns as the matrix the
    /// model was fit on.
    pub fn predict(&self, x_new: &Matrix) -> Result<Vector> {
        if x_new.ncols() != self.slopes.len() {
            return Err(ModelError::Data(DataError::DimensionMismatch {
                expected: format!("{} columns", self.slopes.len()),
                actual: format!("{} columns", x_new.ncols()),
            }));
        }

        Ok(x_new.dot(&self.slopes) + self.intercept)
    }

    /// R-squared of the fit
    pub fn r_squared(&self) -> f64 {
        self.statistics.r_squared
    }

    /// Mean squared error of the fit
    pub fn mse(&self) -> f64 {
        self.statistics.mse
    }

    /// Create coefficient structs, one per model term.
    ///
    /// `slope_names` labels the slopes in design-matrix column order;
    /// missing names fall back to positional labels.
    pub fn to_coefficients(&self, slope_names: &[String]) -> Vec<Coefficient> {
        let estimates = std::iter::once(self.intercept).chain(self.slopes.iter().copied());

        estimates
            .zip(self.std_errors.iter())
            .zip(self.t_stats.iter())
            .zip(self.p_values.iter())
            .enumerate()
            .map(|(i, (((estimate, &se), &t), &p))| {
                let name = if i == 0 {
                    "(Intercept)".to_string()
                } else if let Some(name) = slope_names.get(i - 1) {
                    name.clone()
                } else {
                    format!("x{}", i)
                };

                Coefficient {
                    name,
                    estimate,
                    std_error: se,
                    t_stat: t,
                    p_value: p,
                    is_intercept: i == 0,
                }
            })
            .collect()
    }
}
