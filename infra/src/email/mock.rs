//! Mock email service implementation
//!
//! Logs verification emails instead of sending them. Used in development
//! (`USE_MOCK_EMAIL=true`) and in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use otp_core::services::otp::EmailServiceTrait;

use super::{is_valid_email, mask_email};

/// Mock email service for development and testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate delivery failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            return Err("simulated email failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            to = %mask_email(email),
            code = code,
            "MOCK EMAIL: verification code (not actually sent)"
        );

        Ok(format!("mock-email-{}", count))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_counts_messages() {
        let service = MockEmailService::new();

        let id = service
            .send_verification_code("a@x.com", "123456")
            .await
            .unwrap();
        assert_eq!(id, "mock-email-1");

        service
            .send_verification_code("b@x.com", "654321")
            .await
            .unwrap();
        assert_eq!(service.message_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure_simulation() {
        let service = MockEmailService::failing();

        let result = service.send_verification_code("a@x.com", "123456").await;
        assert!(result.is_err());
        assert_eq!(service.message_count(), 0);
    }
}
