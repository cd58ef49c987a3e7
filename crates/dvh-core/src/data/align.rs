//! Missing-data alignment across cohort variables
//!
//! Regression and control charts require every variable to have a
//! numeric entry for every study. Alignment finds each study with any
//! missing entry in any variable and drops that study everywhere,
//! companions included, preserving the original relative order.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use ndarray::Axis;

use super::{Cohort, DataError, FloatArray, Matrix, Result, Vector};

/// A cohort with all incomplete studies removed.
///
/// Every series (variables and companions) shares one length, and an
/// index refers to the same original study in all of them.
#[derive(Debug, Clone)]
pub struct AlignedCohort {
    names: Vec<String>,
    columns: Vec<FloatArray>,
    mrn: Option<Vec<String>>,
    uid: Option<Vec<String>>,
    dates: Option<Vec<NaiveDate>>,
    dropped: Vec<usize>,
}

impl Cohort {
    /// Drop every study with a missing entry in any variable.
    ///
    /// An all-missing cohort aligns to empty series; that is a valid
    /// result, and it is the models' job to reject samples that are
    /// too small for them.
    pub fn aligned(&self) -> AlignedCohort {
        let mut bad_indices = BTreeSet::new();
        for variable in &self.variables {
            bad_indices.extend(variable.missing_indices());
        }

        let keep = |i: &usize| !bad_indices.contains(i);

        let columns = self
            .variables
            .iter()
            .map(|variable| {
                variable
                    .values()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| keep(i))
                    // Entries at kept indices are numeric in every variable.
                    .filter_map(|(_, v)| v.as_f64())
                    .collect::<FloatArray>()
            })
            .collect();

        let filter_companion = |vals: &Option<Vec<String>>| {
            vals.as_ref().map(|vals| {
                vals.iter()
                    .enumerate()
                    .filter(|(i, _)| keep(i))
                    .map(|(_, v)| v.clone())
                    .collect()
            })
        };

        let dates = self.dates.as_ref().map(|dates| {
            dates
                .iter()
                .enumerate()
                .filter(|(i, _)| keep(i))
                .map(|(_, d)| *d)
                .collect()
        });

        AlignedCohort {
            names: self.variables.iter().map(|v| v.name().to_string()).collect(),
            columns,
            mrn: filter_companion(&self.mrn),
            uid: filter_companion(&self.uid),
            dates,
            dropped: bad_indices.into_iter().collect(),
        }
    }
}

impl AlignedCohort {
    /// Number of remaining studies
    pub fn n_studies(&self) -> usize {
        self.columns.first().map_or(0, |c| c.len())
    }

    /// Variable names, in cohort insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Aligned numeric series for one variable
    pub fn column(&self, name: &str) -> Result<&FloatArray> {
        let idx = self.index_of(name)?;
        Ok(&self.columns[idx])
    }

    /// All aligned numeric series, in cohort insertion order
    pub fn columns(&self) -> &[FloatArray] {
        &self.columns
    }

    /// Patient identifiers for the remaining studies
    pub fn mrn(&self) -> Option<&[String]> {
        self.mrn.as_deref()
    }

    /// Study instance UIDs for the remaining studies
    pub fn uid(&self) -> Option<&[String]> {
        self.uid.as_deref()
    }

    /// Sim study dates for the remaining studies
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Original indices of the dropped studies, in ascending order
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Build the design matrix and response vector for regression.
    ///
    /// The named variable becomes the response; all other variables
    /// become columns of X in insertion order.
    pub fn design_matrix(&self, response: &str) -> Result<(Matrix, Vector)> {
        let response_idx = self.index_of(response)?;
        let n = self.n_studies();
        let k = self.columns.len() - 1;

        let y = self.columns[response_idx].clone();

        let mut x = Matrix::zeros((n, k));
        let predictors = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != response_idx)
            .map(|(_, c)| c);
        for (j, column) in predictors.enumerate() {
            x.index_axis_mut(Axis(1), j).assign(column);
        }

        Ok((x, y))
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DataError::VariableNotFound(name.to_string()))
    }
}
