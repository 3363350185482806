//! In-memory code store
//!
//! Process-lifetime map from email to pending code. A single mutex
//! serializes all operations, which satisfies the per-identity
//! serialization contract and makes `check_and_consume` atomic: the
//! read-check-delete sequence runs under one lock acquisition, so a code
//! can be consumed at most once even under concurrent verification.
//!
//! No durability: entries are discarded at process stop.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use otp_core::domain::entities::{CodeCheck, PendingCode};
use otp_core::services::otp::CodeStoreTrait;

/// In-memory implementation of the code store contract
#[derive(Default)]
pub struct InMemoryCodeStore {
    entries: Mutex<HashMap<String, PendingCode>>,
}

impl InMemoryCodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired or not
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CodeStoreTrait for InMemoryCodeStore {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        let now = Utc::now();
        let entry = PendingCode {
            email: email.to_string(),
            code: code.to_string(),
            created_at: now,
            expires_at: now + ttl,
        };
        // Unconditional overwrite: a new issuance replaces any prior code
        self.entries
            .lock()
            .map_err(|e| format!("store lock poisoned: {}", e))?
            .insert(email.to_string(), entry);
        debug!(email = email, "Stored pending code");
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<PendingCode>, String> {
        Ok(self
            .entries
            .lock()
            .map_err(|e| format!("store lock poisoned: {}", e))?
            .get(email)
            .cloned())
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| format!("store lock poisoned: {}", e))?
            .remove(email);
        Ok(())
    }

    async fn check_and_consume(
        &self,
        email: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<CodeCheck, String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("store lock poisoned: {}", e))?;

        let Some(entry) = entries.get(email) else {
            return Ok(CodeCheck::Missing);
        };

        let check = entry.evaluate(submitted, now);
        match check {
            // Single-use on success; lazy purge on observed expiry
            CodeCheck::Consumed | CodeCheck::Expired => {
                entries.remove(email);
            }
            // Mismatch keeps the entry so the caller may retry
            CodeCheck::Mismatch | CodeCheck::Missing => {}
        }
        Ok(check)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("store lock poisoned: {}", e))?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - entries.len())
    }
}
