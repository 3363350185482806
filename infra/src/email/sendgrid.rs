//! SendGrid email delivery
//!
//! Sends verification emails through the SendGrid v3 mail-send API.
//! Configuration comes from environment variables; the recipient address is
//! masked in all log output.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info};

use otp_core::services::otp::EmailServiceTrait;

use super::{is_valid_email, mask_email, verification_email_html, VERIFICATION_SUBJECT};
use crate::InfraError;

/// SendGrid v3 mail-send endpoint
const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid service configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// SendGrid API key
    pub api_key: String,
    /// Sender address, must be a verified SendGrid sender
    pub from_email: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl SendGridConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let api_key = std::env::var("SENDGRID_API_KEY")
            .map_err(|_| InfraError::Config("SENDGRID_API_KEY not set".to_string()))?;
        let from_email = std::env::var("OTP_FROM_EMAIL")
            .map_err(|_| InfraError::Config("OTP_FROM_EMAIL not set".to_string()))?;

        if !is_valid_email(&from_email) {
            return Err(InfraError::Config(
                "OTP_FROM_EMAIL must be a valid email address".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            from_email,
            request_timeout_secs: std::env::var("SENDGRID_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// SendGrid email service implementation
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridEmailService {
    /// Create a new SendGrid email service
    pub fn new(config: SendGridConfig) -> Result<Self, InfraError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfraError::Config(format!("failed to build HTTP client: {}", e)))?;

        info!(
            from = %mask_email(&config.from_email),
            "SendGrid email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let config = SendGridConfig::from_env()?;
        Self::new(config)
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, InfraError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.config.from_email },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html }],
        });

        debug!(to = %mask_email(to), "Submitting mail to SendGrid");

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| InfraError::Email(format!("SendGrid request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_email(to),
                status = %status,
                body = %body,
                "SendGrid rejected the message"
            );
            return Err(InfraError::Email(format!(
                "SendGrid returned status {}",
                status
            )));
        }

        // SendGrid answers 202 with the message id in a response header
        let message_id = response
            .headers()
            .get("X-Message-Id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        info!(
            to = %mask_email(to),
            message_id = %message_id,
            "Verification email accepted by SendGrid"
        );

        Ok(message_id)
    }
}

#[async_trait]
impl EmailServiceTrait for SendGridEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if !is_valid_email(email) {
            return Err(format!("invalid recipient address: {}", mask_email(email)));
        }

        self.send(email, VERIFICATION_SUBJECT, &verification_email_html(code))
            .await
            .map_err(|e| e.to_string())
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_bad_from_address() {
        // from_env reads process env; exercise the validation path directly
        let config = SendGridConfig {
            api_key: "SG.test".to_string(),
            from_email: "not-an-email".to_string(),
            request_timeout_secs: 30,
        };
        assert!(!is_valid_email(&config.from_email));
    }

    #[test]
    fn test_service_builds_from_config() {
        let config = SendGridConfig {
            api_key: "SG.test".to_string(),
            from_email: "noreply@productr.example".to_string(),
            request_timeout_secs: 5,
        };
        assert!(SendGridEmailService::new(config).is_ok());
    }
}
