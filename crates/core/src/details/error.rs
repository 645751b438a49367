//! Errors raised while projecting ledger values into details maps.

use horizon_shared::AppError;
use thiserror::Error;

/// Errors that can occur during detail projection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailsError {
    /// The asset could not be decoded into (type, code, issuer).
    #[error("Malformed asset: {reason}")]
    MalformedAsset {
        /// What was wrong with the asset.
        reason: String,
    },
}

impl DetailsError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedAsset { .. } => "MALFORMED_ASSET",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Projection runs on ledger output, so a failure is a server fault.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MalformedAsset { .. } => 500,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedAsset {
            reason: reason.into(),
        }
    }
}

impl From<DetailsError> for AppError {
    fn from(err: DetailsError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_asset() {
        let err = DetailsError::malformed("empty asset code");
        assert_eq!(err.error_code(), "MALFORMED_ASSET");
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.to_string(), "Malformed asset: empty asset code");

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 500);
    }
}
