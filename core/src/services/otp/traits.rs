//! Traits for email delivery and code store integration

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{CodeCheck, PendingCode};

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to an email address, returning a provider
    /// message id on success
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;

    /// Check if the email address format is plausible
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Trait for the transient code store.
///
/// The store holds at most one [`PendingCode`] per email. Implementations
/// must serialize access per identity; `check_and_consume` in particular
/// must be atomic so that two concurrent verifications of the same code
/// cannot both succeed.
#[async_trait]
pub trait CodeStoreTrait: Send + Sync {
    /// Store a pending code for an email, unconditionally overwriting any
    /// existing entry. `expires_at = now + ttl`.
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String>;

    /// Return the current entry for an email, if any. Pure read; does not
    /// evaluate expiry.
    async fn get(&self, email: &str) -> Result<Option<PendingCode>, String>;

    /// Delete the entry for an email if present; no-op otherwise.
    async fn remove(&self, email: &str) -> Result<(), String>;

    /// Atomically check a submitted code against the stored entry and apply
    /// the single-use policy: remove the entry on a match, remove it on
    /// expiry, keep it on a mismatch. Returns [`CodeCheck::Missing`] when no
    /// entry exists.
    async fn check_and_consume(
        &self,
        email: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<CodeCheck, String>;

    /// Remove every entry whose expiry is at or before `now`, returning the
    /// number of entries purged. Used by the background sweeper.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String>;
}
