//! Configuration for the OTP service

use crate::domain::entities::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}
