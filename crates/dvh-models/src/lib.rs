//! Statistical models for DVH analysis
//!
//! This crate holds the numeric core behind the charting layer:
//! ordinary-least-squares regression with inference diagnostics,
//! Shewhart individuals-chart control limits, dated trend computation,
//! and the adjusted-control-chart pipeline that feeds regression
//! residuals into control limits.
//!
//! All computations are pure and synchronous: each call reads its
//! arguments and returns freshly allocated value objects, so results
//! may be recomputed or discarded freely by the caller.

pub mod base;
pub mod control;
pub mod error;
pub mod pipeline;
pub mod regression;
pub mod trend;

pub use base::{Coefficient, ModelStatistics};
pub use control::{ControlLimits, MOVING_RANGE_D2};
pub use error::{ModelError, Result};
pub use pipeline::{adjusted_control_chart, control_chart, AdjustedChart, ControlChart};
pub use regression::{FitResult, NormalProbPlot, Ols};
pub use trend::{collapse_by_date, moving_average, percentile_band, DatedPoint, PercentileBand};
