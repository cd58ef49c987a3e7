//! Named per-study variable series

use serde::{Deserialize, Serialize};

use super::Value;

/// A named series of per-study observations, one entry per study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    values: Vec<Value>,
}

impl Variable {
    /// Create a variable from explicit values
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create a variable with no missing entries
    pub fn from_numbers(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, values.into_iter().map(Value::Number).collect())
    }

    /// Create a variable from optional values
    pub fn from_options(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, values.into_iter().map(Value::from).collect())
    }

    /// Create a variable from raw query-layer strings (sentinel-aware)
    pub fn from_raw<T: AsRef<str>>(name: impl Into<String>, raw: &[T]) -> Self {
        Self::new(name, raw.iter().map(|s| Value::parse(s.as_ref())).collect())
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observations, one per study
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of entries (including missing ones)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the variable has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Indices of missing entries, in ascending order
    pub fn missing_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_missing())
            .map(|(i, _)| i)
    }
}
