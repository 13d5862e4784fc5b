//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// The variants follow the failure modes of the hosted backend: callers
/// surface them to the user as a recoverable notification and never retry
/// automatically, since expense writes are not idempotent.
#[derive(Debug, Error)]
pub enum AppError {
    /// No valid identity accompanies the request.
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    /// Resource not found (or owned by someone else).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input was rejected before reaching storage.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The hosted backend could not be reached or failed mid-request.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated(_) => 401,
            Self::NotFound(_) => 404,
            Self::ValidationFailed(_) => 400,
            Self::TransportFailure(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::TransportFailure(_) => "TRANSPORT_FAILURE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures caused by the server side rather than the caller.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Unauthenticated(String::new()).status_code(), 401);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::ValidationFailed(String::new()).status_code(), 400);
        assert_eq!(AppError::TransportFailure(String::new()).status_code(), 503);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Unauthenticated(String::new()).error_code(),
            "UNAUTHENTICATED"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::ValidationFailed(String::new()).error_code(),
            "VALIDATION_FAILED"
        );
        assert_eq!(
            AppError::TransportFailure(String::new()).error_code(),
            "TRANSPORT_FAILURE"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }
}
