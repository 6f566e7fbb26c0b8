//! Error type shared by the solver components.

use std::fmt;

/// Errors reported by the solution pool, the population and the
/// configuration checks.
///
/// Running out of time or iterations is not an error: it is the normal way
/// a search ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A budget or size parameter is outside its valid range.
    InvalidConfig(String),
    /// `best()` was called on a pool that holds no solution.
    EmptyPool,
    /// A tournament needs more members than the population currently holds.
    PopulationTooSmall { required: usize, actual: usize },
}

impl SolverError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        SolverError::InvalidConfig(message.into())
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidConfig(message) => write!(f, "invalid configuration: {}", message),
            SolverError::EmptyPool => write!(f, "the solution pool is empty"),
            SolverError::PopulationTooSmall { required, actual } => write!(
                f,
                "population holds {} solution(s), tournament needs at least {}",
                actual, required
            ),
        }
    }
}

impl std::error::Error for SolverError {}
