//! Email delivery implementations
//!
//! Supports:
//! - SendGrid HTTP API for production delivery
//! - Mock implementation for development and testing

use async_trait::async_trait;

use otp_core::services::otp::EmailServiceTrait;

use crate::InfraError;

pub mod mock;
pub mod sendgrid;

pub use mock::MockEmailService;
pub use sendgrid::{SendGridConfig, SendGridEmailService};

/// Email service selected at startup.
///
/// The OTP service is generic over its notifier, so the provider choice is
/// expressed as an enum rather than a trait object.
pub enum EmailProvider {
    /// Production delivery via SendGrid
    SendGrid(SendGridEmailService),
    /// Console-logging mock for development
    Mock(MockEmailService),
}

/// Create an email service based on configuration.
///
/// With `use_mock` set, returns the console-logging mock; otherwise builds
/// the SendGrid service from environment variables.
pub fn create_email_service(use_mock: bool) -> Result<EmailProvider, InfraError> {
    if use_mock {
        Ok(EmailProvider::Mock(MockEmailService::new()))
    } else {
        Ok(EmailProvider::SendGrid(SendGridEmailService::from_env()?))
    }
}

#[async_trait]
impl EmailServiceTrait for EmailProvider {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            EmailProvider::SendGrid(svc) => svc.send_verification_code(email, code).await,
            EmailProvider::Mock(svc) => svc.send_verification_code(email, code).await,
        }
    }

    fn is_valid_email(&self, email: &str) -> bool {
        match self {
            EmailProvider::SendGrid(svc) => svc.is_valid_email(email),
            EmailProvider::Mock(svc) => svc.is_valid_email(email),
        }
    }
}

/// Subject line used for every verification email
pub const VERIFICATION_SUBJECT: &str = "Your Productr Verification Code";

/// Build the HTML body for a verification email.
///
/// Carries the code and the five-minute expiry notice.
pub fn verification_email_html(code: &str) -> String {
    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">",
            "<h2>Verification Code</h2>",
            "<p>Your OTP for Productr login is:</p>",
            "<h1 style=\"letter-spacing: 8px;\">{code}</h1>",
            "<p>This code will expire in 5 minutes.</p>",
            "<p>If you didn't request this code, please ignore this email.</p>",
            "</div>"
        ),
        code = code
    )
}

/// Helper function to mask email addresses for logging.
///
/// Keeps the first character of the local part and the full domain.
///
/// # Example
///
/// ```ignore
/// let masked = mask_email("someone@example.com");
/// assert_eq!(masked, "s******@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            let masked: String = "*".repeat(local.chars().count() - 1);
            format!("{}{}@{}", first, masked, domain)
        }
        _ => "*".repeat(email.chars().count()),
    }
}

/// Validate the general shape of an email address.
///
/// This is deliberately loose: exactly one '@' with a non-empty local part
/// and a domain containing a dot. Real validation happens at the inbox.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
