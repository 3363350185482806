//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// The generated 6-digit code. Always present, even when delivery
    /// failed: the HTTP layer echoes it back to the caller (reference
    /// behavior, kept for API compatibility).
    pub code: String,
    /// Whether the email service accepted the message. Delivery failure is
    /// non-fatal; the stored code stays valid either way.
    pub delivered: bool,
    /// When the code expires
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a verification attempt.
///
/// Per-identity state machine: the pending entry is removed on `Verified`
/// and on `Expired`, and kept on `Mismatch` so the caller may retry with
/// the correct code until expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The submitted code matched before expiry; the entry was consumed
    Verified,
    /// No pending code exists for the email
    NoSuchRequest,
    /// A pending code existed but had expired; it was purged
    Expired,
    /// The submitted code did not match; the entry stays pending
    Mismatch,
}
