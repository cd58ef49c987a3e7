//! Cohorts: equal-length variables plus patient/study companions

use chrono::NaiveDate;

use super::{DataError, Result, Value, Variable};

/// A set of equal-length variables with optional identifier companions.
///
/// Companions (MRN, study instance UID, sim study date) travel with the
/// variables through alignment so downstream chart consumers can label
/// individual points.
#[derive(Debug, Clone)]
pub struct Cohort {
    pub(crate) variables: Vec<Variable>,
    pub(crate) mrn: Option<Vec<String>>,
    pub(crate) uid: Option<Vec<String>>,
    pub(crate) dates: Option<Vec<NaiveDate>>,
    pub(crate) n_studies: usize,
}

impl Cohort {
    /// Start building a cohort
    pub fn builder() -> CohortBuilder {
        CohortBuilder::new()
    }

    /// Number of studies (rows), including those with missing entries
    pub fn n_studies(&self) -> usize {
        self.n_studies
    }

    /// Number of variables
    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    /// Variables in insertion order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.variables
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| DataError::VariableNotFound(name.to_string()))
    }

    /// Patient identifiers, if provided
    pub fn mrn(&self) -> Option<&[String]> {
        self.mrn.as_deref()
    }

    /// Study instance UIDs, if provided
    pub fn uid(&self) -> Option<&[String]> {
        self.uid.as_deref()
    }

    /// Sim study dates, if provided
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }
}

/// Builder for creating cohorts with length validation
pub struct CohortBuilder {
    variables: Vec<Variable>,
    mrn: Option<Vec<String>>,
    uid: Option<Vec<String>>,
    dates: Option<Vec<NaiveDate>>,
    n_studies: Option<usize>,
}

impl CohortBuilder {
    /// Create a new CohortBuilder
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            mrn: None,
            uid: None,
            dates: None,
            n_studies: None,
        }
    }

    /// Add a variable
    pub fn with_variable(mut self, variable: Variable) -> Result<Self> {
        if self.variables.iter().any(|v| v.name() == variable.name()) {
            return Err(DataError::DuplicateVariable(variable.name().to_string()));
        }
        self.check_len(variable.name(), variable.len())?;
        self.variables.push(variable);
        Ok(self)
    }

    /// Add a variable from explicit values
    pub fn with_values(self, name: impl Into<String>, values: Vec<Value>) -> Result<Self> {
        self.with_variable(Variable::new(name, values))
    }

    /// Set patient identifiers
    pub fn with_mrn(mut self, mrn: Vec<String>) -> Result<Self> {
        self.check_len("mrn", mrn.len())?;
        self.mrn = Some(mrn);
        Ok(self)
    }

    /// Set study instance UIDs
    pub fn with_uid(mut self, uid: Vec<String>) -> Result<Self> {
        self.check_len("uid", uid.len())?;
        self.uid = Some(uid);
        Ok(self)
    }

    /// Set sim study dates
    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> Result<Self> {
        self.check_len("dates", dates.len())?;
        self.dates = Some(dates);
        Ok(self)
    }

    /// Build the cohort
    pub fn build(self) -> Result<Cohort> {
        if self.variables.is_empty() {
            return Err(DataError::EmptyCohort);
        }

        Ok(Cohort {
            variables: self.variables,
            mrn: self.mrn,
            uid: self.uid,
            dates: self.dates,
            n_studies: self.n_studies.unwrap_or(0),
        })
    }

    fn check_len(&mut self, name: &str, len: usize) -> Result<()> {
        match self.n_studies {
            Some(n) if len != n => Err(DataError::LengthMismatch {
                name: name.to_string(),
                expected: n,
                actual: len,
            }),
            None => {
                self.n_studies = Some(len);
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Default for CohortBuilder {
    fn default() -> Self {
        Self::new()
    }
}
