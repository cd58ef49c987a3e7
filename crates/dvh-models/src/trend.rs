//! Time-series trend computation over dated study samples
//!
//! Studies arrive with irregular, sometimes duplicated sim study
//! dates. Trending first collapses same-day studies into one mean
//! point (a moving average over duplicate dates would double-weight
//! them), then slides a fixed-length window over the collapsed
//! chronological series. Percentile bands are order-statistic based
//! and make no normality assumption.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::base::{ModelError, Result};
use dvh_core::data::DataError;


/// One point of a dated series
pub type DatedPoint = (NaiveDate, f64);

/// Two-sided percentile band around the median
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBand {
    /// (50 − p/2)-th percentile
    pub lower: f64,
    /// Median
    pub center: f64,
    /// (50 + p/2)-th percentile
    pub upper: f64,
}

/// Collapse same-day observations into single mean-valued points.
///
/// Output is chronologically sorted; empty input yields empty output.
pub fn collapse_by_date(dates: &[NaiveDate], values: &[f64]) -> Result<Vec<DatedPoint>> {
    if dates.len() != values.len() {
        return Err(ModelError::Data(DataError::DimensionMismatch {
            expected: format!("{} values", dates.len()),
            actual: format!("{} values", values.len()),
        }));
    }

    let mut grouped: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for (&date, &value) in dates.iter().zip(values.iter()) {
        let entry = grouped.entry(date).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(grouped
        .into_iter()
        .map(|(date, (sum, count))| (date, sum / count as f64))
        .collect())
}

/// Moving average over a date-collapsed, chronologically sorted series.
///
/// Only full windows are emitted: the output starts at the window-th
/// point and is anchored at each window's last date, so a series
/// shorter than the window produces no points. Window length 1 is the
/// identity passthrough.
pub fn moving_average(collapsed: &[DatedPoint], window: usize) -> Result<Vec<DatedPoint>> {
    if window == 0 {
        return Err(ModelError::Data(DataError::InvalidParameter(
            "moving-average window must be at least 1".to_string(),
        )));
    }

    if collapsed.len() < window {
        return Ok(Vec::new());
    }

    Ok(collapsed
        .windows(window)
        .map(|w| {
            let mean = w.iter().map(|(_, v)| v).sum::<f64>() / window as f64;
            (w[window - 1].0, mean)
        })
        .collect())
}

/// Two-sided percentile band with total coverage `coverage` (percent).
///
/// Bounds are the (50 − p/2)-th and (50 + p/2)-th order-statistic
/// percentiles with linear interpolation; the center is the median.
pub fn percentile_band(values: &[f64], coverage: f64) -> Result<PercentileBand> {
    if !(0.0..=100.0).contains(&coverage) || coverage == 0.0 {
        return Err(ModelError::Data(DataError::InvalidParameter(format!(
            "coverage must be in (0, 100], got {}",
            coverage
        ))));
    }

    if values.is_empty() {
        return Err(ModelError::InsufficientData {
            n_samples: 0,
            n_predictors: 0,
        });
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Ok(PercentileBand {
        lower: percentile(&sorted, 50.0 - coverage / 2.0),
        center: percentile(&sorted, 50.0),
        upper: percentile(&sorted, 50.0 + coverage / 2.0),
    })
}

/// Linear-interpolated percentile of an ascending-sorted sample
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = (sorted.len() as f64 - 1.0) * p / 100.0;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}
