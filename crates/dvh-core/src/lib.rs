//! Core data structures for DVH statistics
//!
//! This crate provides the data layer shared by the statistical models:
//! per-study observation values with explicit missing-value handling,
//! named variable series, cohorts with patient/study companions, and
//! the alignment step that prepares regression-ready arrays.

pub mod data;

pub use data::{
    AlignedCohort, Cohort, CohortBuilder, DataError, FloatArray, Matrix, Value, Variable, Vector,
};
