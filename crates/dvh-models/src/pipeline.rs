//! Control-chart pipelines over cohorts
//!
//! The charting layer needs two chart variants from the same cohort:
//! the raw individuals chart of a single variable, and the "adjusted"
//! chart where control limits are computed on the residuals of a
//! regression fit, so that known covariates no longer drive points out
//! of control. This module composes align → fit → residuals → limits
//! explicitly.

use crate::base::Result;
use crate::control::ControlLimits;
use crate::regression::{FitResult, Ols};
use dvh_core::data::Cohort;


/// A raw individuals control chart
#[derive(Debug, Clone)]
pub struct ControlChart {
    /// Chart limits
    pub limits: ControlLimits,
    /// Per-point classification, index-aligned with the input series
    pub in_control: Vec<bool>,
}

/// An adjusted control chart: limits on regression residuals
#[derive(Debug, Clone)]
pub struct AdjustedChart {
    /// The underlying regression fit
    pub fit: FitResult,
    /// Limits computed on the fit residuals
    pub limits: ControlLimits,
    /// Per-residual classification, index-aligned with the fit
    pub in_control: Vec<bool>,
}

/// Build a raw control chart from a one-dimensional sample
pub fn control_chart(values: &[f64]) -> Result<ControlChart> {
    let limits = ControlLimits::from_sample(values)?;
    let in_control = limits.flag(values);
    Ok(ControlChart { limits, in_control })
}

/// Build an adjusted control chart for a cohort.
///
/// The cohort is aligned, the named response is regressed on every
/// other variable, and control limits are computed on the residuals.
pub fn adjusted_control_chart(cohort: &Cohort, response: &str) -> Result<AdjustedChart> {
    let aligned = cohort.aligned();
    let (x, y) = aligned.design_matrix(response)?;
    let fit = Ols::fit(&x, &y)?;

    let residuals = fit.residuals.to_vec();
    let limits = ControlLimits::from_sample(&residuals)?;
    let in_control = limits.flag(&residuals);

    Ok(AdjustedChart {
        fit,
        limits,
        in_control,
    })
}
