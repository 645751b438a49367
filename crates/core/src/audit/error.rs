//! Audit error types.

use horizon_shared::AppError;
use thiserror::Error;

/// Errors that can occur while shaping audit records.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The descriptor is missing its actor, subject or action.
    #[error("Invalid admin action: {0}")]
    InvalidDescriptor(String),

    /// The meta payload could not be encoded as JSON.
    #[error("Failed to serialize audit meta: {0}")]
    MetaSerialization(#[from] serde_json::Error),
}

impl AuditError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDescriptor(_) => "INVALID_ADMIN_ACTION",
            Self::MetaSerialization(_) => "META_SERIALIZATION_FAILED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidDescriptor(_) => 400,
            Self::MetaSerialization(_) => 500,
        }
    }
}

impl From<AuditError> for AppError {
    fn from(err: AuditError) -> Self {
        match err {
            AuditError::InvalidDescriptor(_) => Self::Validation(err.to_string()),
            AuditError::MetaSerialization(_) => Self::Internal(err.to_string()),
        }
    }
}
