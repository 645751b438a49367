//! Statistics limit errors.

use horizon_shared::{AppError, Amount};
use thiserror::Error;

use super::restrictions::Limit;

/// Errors raised by statistics-based policy checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// An operation would push an aggregated counter past its limit.
    #[error("Limit {limit} exceeded: {total} > {max}")]
    LimitExceeded {
        /// The limit that was hit.
        limit: Limit,
        /// Aggregated value including the pending operation.
        total: Amount,
        /// Configured maximum.
        max: Amount,
    },
}

impl StatsError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::LimitExceeded { .. } => 422,
        }
    }
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
