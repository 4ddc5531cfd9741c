//! Error types for control chart evaluation
//!
//! Provides a unified error type for the whole crate. Per-rule data
//! insufficiency is NOT an error: it is reported as a
//! [`RuleStatus::InsufficientData`](crate::report::RuleStatus) so a short
//! series never aborts the rest of the report.

use thiserror::Error;

/// Crate-wide error type for control chart operations
#[derive(Error, Debug)]
pub enum Error {
    /// Insufficient data for an operation that cannot produce any result
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data (non-finite values, negative standard deviation)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
