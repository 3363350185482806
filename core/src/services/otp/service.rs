//! OTP service implementation - issuance and verification

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing;

use crate::domain::entities::{CodeCheck, PendingCode};
use crate::errors::{OtpError, OtpResult};

use super::config::OtpServiceConfig;
use super::traits::{CodeStoreTrait, EmailServiceTrait};
use super::types::{IssueCodeResult, VerifyOutcome};

/// OTP service handling email verification codes
pub struct OtpService<N: EmailServiceTrait, S: CodeStoreTrait> {
    /// Email service for delivering codes
    email_service: Arc<N>,
    /// Code store holding pending codes
    code_store: Arc<S>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<N: EmailServiceTrait, S: CodeStoreTrait> OtpService<N, S> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `email_service` - Email delivery implementation
    /// * `code_store` - Code store implementation
    /// * `config` - Service configuration
    pub fn new(email_service: Arc<N>, code_store: Arc<S>, config: OtpServiceConfig) -> Self {
        Self {
            email_service,
            code_store,
            config,
        }
    }

    /// Issue a verification code for an email address.
    ///
    /// This method:
    /// 1. Validates that the email is non-empty
    /// 2. Generates a fresh 6-digit code
    /// 3. Stores it, overwriting any prior pending code for the email
    /// 4. Requests delivery via the email service
    ///
    /// The store write happens before the delivery attempt, so notifier
    /// latency or failure never affects store consistency. Delivery failure
    /// is non-fatal: the result carries `delivered: false` and the stored
    /// code remains valid.
    ///
    /// # Arguments
    ///
    /// * `email` - The email address to issue a code for
    ///
    /// # Returns
    ///
    /// * `Ok(IssueCodeResult)` - The generated code, delivery flag, and expiry
    /// * `Err(OtpError)` - If the email is empty or the store write fails
    pub async fn issue_code(&self, email: &str) -> OtpResult<IssueCodeResult> {
        if email.is_empty() {
            return Err(OtpError::invalid_request("email"));
        }

        let code = PendingCode::generate_code();
        let ttl = Duration::minutes(self.config.code_expiration_minutes);
        let expires_at = Utc::now() + ttl;

        tracing::info!(
            email = email,
            event = "otp_generated",
            "Generated new verification code"
        );

        // Write first: a failed store write aborts issuance
        self.code_store
            .put(email, &code, ttl)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = email,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store verification code"
                );
                OtpError::internal(format!("Failed to store verification code: {}", e))
            })?;

        // Delivery failure is swallowed here and surfaced only as a flag
        let delivered = match self
            .email_service
            .send_verification_code(email, &code)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    email = email,
                    message_id = %message_id,
                    event = "otp_sent",
                    "Verification code sent"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    email = email,
                    error = %e,
                    event = "otp_delivery_failed",
                    "Email delivery failed; code remains valid"
                );
                false
            }
        };

        Ok(IssueCodeResult {
            code,
            delivered,
            expires_at,
        })
    }

    /// Verify a submitted code for an email address.
    ///
    /// The read-check-delete step runs as a single atomic store operation,
    /// so a code can be consumed at most once even under concurrent
    /// verification attempts. Transitions:
    ///
    /// * no entry -> `NoSuchRequest`
    /// * entry expired (any code) -> `Expired`, entry purged
    /// * match before expiry -> `Verified`, entry consumed
    /// * mismatch before expiry -> `Mismatch`, entry kept for retry
    ///
    /// # Arguments
    ///
    /// * `email` - The email address the code was issued for
    /// * `submitted` - The code submitted by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOutcome)` - The verification outcome
    /// * `Err(OtpError)` - If either field is empty or the store fails
    pub async fn verify_code(&self, email: &str, submitted: &str) -> OtpResult<VerifyOutcome> {
        if email.is_empty() {
            return Err(OtpError::invalid_request("email"));
        }
        if submitted.is_empty() {
            return Err(OtpError::invalid_request("otp"));
        }

        let check = self
            .code_store
            .check_and_consume(email, submitted, Utc::now())
            .await
            .map_err(|e| {
                tracing::error!(
                    email = email,
                    error = %e,
                    event = "otp_verification_error",
                    "Store error during code verification"
                );
                OtpError::internal(format!("Failed to verify code: {}", e))
            })?;

        let outcome = match check {
            CodeCheck::Consumed => VerifyOutcome::Verified,
            CodeCheck::Mismatch => VerifyOutcome::Mismatch,
            CodeCheck::Expired => VerifyOutcome::Expired,
            CodeCheck::Missing => VerifyOutcome::NoSuchRequest,
        };

        match outcome {
            VerifyOutcome::Verified => {
                tracing::info!(
                    email = email,
                    event = "otp_verified",
                    "Verification code accepted and consumed"
                );
            }
            VerifyOutcome::Mismatch => {
                tracing::warn!(
                    email = email,
                    event = "otp_mismatch",
                    "Submitted code did not match; entry kept"
                );
            }
            VerifyOutcome::Expired => {
                tracing::info!(
                    email = email,
                    event = "otp_expired",
                    "Verification code expired; entry purged"
                );
            }
            VerifyOutcome::NoSuchRequest => {
                tracing::info!(
                    email = email,
                    event = "otp_not_found",
                    "No pending verification code for email"
                );
            }
        }

        Ok(outcome)
    }

    /// Check if a pending code exists for an email address.
    ///
    /// Pure read; does not evaluate expiry.
    pub async fn code_exists(&self, email: &str) -> OtpResult<bool> {
        self.code_store
            .get(email)
            .await
            .map(|entry| entry.is_some())
            .map_err(|e| OtpError::internal(format!("Failed to read code store: {}", e)))
    }
}
