//! Domain-specific error types and error handling.

use thiserror::Error;

/// Result alias for core OTP operations
pub type OtpResult<T> = Result<T, OtpError>;

/// Core OTP errors.
///
/// Verification outcomes (wrong code, expired code, no pending code) are
/// NOT errors; they are reported as [`crate::services::otp::VerifyOutcome`]
/// values. Only request-shape problems and unexpected faults surface here.
#[derive(Error, Debug)]
pub enum OtpError {
    /// A required field was missing or empty
    #[error("Invalid request: {field} is required")]
    InvalidRequest { field: String },

    /// Unexpected internal fault (e.g. store failure). The message is for
    /// operators; callers only ever see a generic failure response.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OtpError {
    /// Shorthand for a missing/empty required field.
    pub fn invalid_request(field: impl Into<String>) -> Self {
        Self::InvalidRequest {
            field: field.into(),
        }
    }

    /// Shorthand for an internal fault.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let err = OtpError::invalid_request("email");
        assert_eq!(err.to_string(), "Invalid request: email is required");
    }

    #[test]
    fn test_internal_display() {
        let err = OtpError::internal("store poisoned");
        assert_eq!(err.to_string(), "Internal error: store poisoned");
    }
}
