//! Per-entry observation values with explicit missing-value handling
//!
//! The upstream query layer encodes a missing observation as the
//! literal string `"None"` mixed into otherwise numeric columns. That
//! sentinel never survives past this type: an entry is either a number
//! or `Missing`, and numeric code only ever sees entries that parsing
//! and alignment have already vetted.

use serde::{Deserialize, Serialize};

/// A single per-study observation: a number or an explicitly missing entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A numeric observation
    Number(f64),
    /// A missing observation
    Missing,
}

impl Value {
    /// Parse a raw query-layer string.
    ///
    /// The sentinel `"None"` and any unparseable text map to `Missing`.
    pub fn parse(raw: &str) -> Self {
        if raw == "None" {
            return Value::Missing;
        }
        match raw.trim().parse::<f64>() {
            Ok(v) => Value::Number(v),
            Err(_) => Value::Missing,
        }
    }

    /// Get the numeric value, if present
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Missing => None,
        }
    }

    /// Check whether this entry is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Value::Number(v),
            None => Value::Missing,
        }
    }
}
