//! Server configuration from environment variables

use otp_core::domain::entities::DEFAULT_EXPIRATION_MINUTES;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Use the console-logging mock instead of SendGrid
    pub use_mock_email: bool,
    /// Minutes before an issued code expires
    pub code_ttl_minutes: i64,
    /// Seconds between expiry sweeps; 0 disables the sweeper
    pub sweep_interval_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// * `SERVER_HOST` - bind address (default "127.0.0.1")
    /// * `SERVER_PORT` - listening port (default 5000)
    /// * `USE_MOCK_EMAIL` - "true" to log emails instead of sending
    /// * `OTP_TTL_MINUTES` - code lifetime (default 5)
    /// * `SWEEP_INTERVAL_SECS` - sweep period, 0 to disable (default 300)
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        let use_mock_email = std::env::var("USE_MOCK_EMAIL")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        let code_ttl_minutes = std::env::var("OTP_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EXPIRATION_MINUTES);
        let sweep_interval_secs = std::env::var("SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            host,
            port,
            use_mock_email,
            code_ttl_minutes,
            sweep_interval_secs,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            use_mock_email: true,
            code_ttl_minutes: 5,
            sweep_interval_secs: 300,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
