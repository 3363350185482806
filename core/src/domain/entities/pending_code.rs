//! Pending verification code entity for email-based login.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Outcome of checking a submitted code against a stored entry.
///
/// `Missing` is reported by the code store when no entry exists for the
/// identity; the other variants are produced by [`PendingCode::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCheck {
    /// The submitted code matched before expiry; the entry must be consumed.
    Consumed,
    /// The submitted code did not match; the entry stays pending.
    Mismatch,
    /// The entry expired before the check; it must be purged regardless of
    /// whether the code matched.
    Expired,
    /// No entry exists for the identity.
    Missing,
}

/// A pending one-time passcode awaiting verification.
///
/// At most one `PendingCode` exists per email at any time; a new issuance
/// for the same email replaces the previous entry. Entries are never
/// mutated in place and are owned exclusively by the code store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCode {
    /// Email address this code was issued for (exact match, no normalization)
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl PendingCode {
    /// Creates a new pending code with a freshly generated 6-digit code
    /// and the default 5-minute expiration.
    ///
    /// # Arguments
    ///
    /// * `email` - The email address the code is issued for
    pub fn new(email: String) -> Self {
        Self::with_ttl(email, Duration::minutes(DEFAULT_EXPIRATION_MINUTES))
    }

    /// Creates a new pending code with a custom time-to-live.
    ///
    /// # Arguments
    ///
    /// * `email` - The email address the code is issued for
    /// * `ttl` - How long the code stays valid
    pub fn with_ttl(email: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a random 6-digit code.
    ///
    /// The code is drawn uniformly from the inclusive range 100000-999999,
    /// so the leading digit is always 1-9. Clients rely on codes being
    /// exactly six digits with no leading zero.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks whether the code has expired at the given instant.
    ///
    /// An entry is visible to verification strictly before `expires_at`;
    /// at or after that instant it is treated as absent.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Checks whether the code has expired now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Evaluates a submitted code against this entry at the given instant.
    ///
    /// This is the per-identity state machine step:
    ///
    /// * expired (any code) -> [`CodeCheck::Expired`], entry must be purged
    /// * not expired, exact match -> [`CodeCheck::Consumed`], entry must be removed
    /// * not expired, no match -> [`CodeCheck::Mismatch`], entry stays pending
    ///
    /// Comparison is exact equality on the full string: no trimming and no
    /// case normalization. The comparison itself is constant-time.
    pub fn evaluate(&self, submitted: &str, now: DateTime<Utc>) -> CodeCheck {
        if self.is_expired_at(now) {
            return CodeCheck::Expired;
        }
        if Self::codes_match(&self.code, submitted) {
            CodeCheck::Consumed
        } else {
            CodeCheck::Mismatch
        }
    }

    /// Constant-time equality on two code strings.
    fn codes_match(stored: &str, submitted: &str) -> bool {
        if stored.len() != submitted.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pending_code() {
        let email = "user@example.com".to_string();
        let pending = PendingCode::new(email.clone());

        assert_eq!(pending.email, email);
        assert_eq!(pending.code.len(), CODE_LENGTH);
        assert!(!pending.is_expired());
        assert_eq!(
            pending.expires_at - pending.created_at,
            Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generate_code_format() {
        // The code must always be six digits with a non-zero leading digit
        for _ in 0..200 {
            let code = PendingCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code should parse");
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| PendingCode::generate_code()).collect();

        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_evaluate_match_before_expiry() {
        let pending = PendingCode::new("user@example.com".to_string());
        let submitted = pending.code.clone();

        assert_eq!(pending.evaluate(&submitted, Utc::now()), CodeCheck::Consumed);
    }

    #[test]
    fn test_evaluate_mismatch_before_expiry() {
        let pending = PendingCode::new("user@example.com".to_string());

        assert_eq!(pending.evaluate("000000", Utc::now()), CodeCheck::Mismatch);
    }

    #[test]
    fn test_evaluate_expired_wins_over_match() {
        let pending = PendingCode::with_ttl("user@example.com".to_string(), Duration::minutes(5));
        let submitted = pending.code.clone();
        let after_expiry = pending.expires_at + Duration::seconds(1);

        assert_eq!(pending.evaluate(&submitted, after_expiry), CodeCheck::Expired);
        assert_eq!(pending.evaluate("000000", after_expiry), CodeCheck::Expired);
    }

    #[test]
    fn test_evaluate_exactly_at_expiry_is_expired() {
        let pending = PendingCode::with_ttl("user@example.com".to_string(), Duration::minutes(5));
        let submitted = pending.code.clone();

        assert_eq!(pending.evaluate(&submitted, pending.expires_at), CodeCheck::Expired);
    }

    #[test]
    fn test_evaluate_rejects_whitespace_padding() {
        // Exact equality: no trimming of submitted codes
        let pending = PendingCode::new("user@example.com".to_string());
        let padded = format!(" {}", pending.code);
        let trailing = format!("{} ", pending.code);

        assert_eq!(pending.evaluate(&padded, Utc::now()), CodeCheck::Mismatch);
        assert_eq!(pending.evaluate(&trailing, Utc::now()), CodeCheck::Mismatch);
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let pending = PendingCode::with_ttl("user@example.com".to_string(), Duration::minutes(5));

        assert!(!pending.is_expired_at(pending.expires_at - Duration::seconds(1)));
        assert!(pending.is_expired_at(pending.expires_at));
        assert!(pending.is_expired_at(pending.expires_at + Duration::seconds(1)));
    }
}
