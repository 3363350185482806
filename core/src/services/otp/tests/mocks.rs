//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{CodeCheck, PendingCode};
use crate::services::otp::traits::{CodeStoreTrait, EmailServiceTrait};

// Mock email service for testing
pub struct MockEmailService {
    pub sent_messages: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_messages.lock().unwrap().get(email).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("email service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", email))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        email.contains('@')
    }
}

// Mock code store for testing
pub struct MockCodeStore {
    pub entries: Arc<Mutex<HashMap<String, PendingCode>>>,
    pub should_fail: bool,
}

impl MockCodeStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    /// Rewrite the stored entry so it expired in the past, for expiry tests.
    pub fn force_expire(&self, email: &str) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(email) {
            entry.expires_at = Utc::now() - Duration::seconds(1);
        }
    }

    pub fn stored_code(&self, email: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(email)
            .map(|e| e.code.clone())
    }
}

#[async_trait]
impl CodeStoreTrait for MockCodeStore {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        if self.should_fail {
            return Err("code store error".to_string());
        }
        let now = Utc::now();
        self.entries.lock().unwrap().insert(
            email.to_string(),
            PendingCode {
                email: email.to_string(),
                code: code.to_string(),
                created_at: now,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<PendingCode>, String> {
        if self.should_fail {
            return Err("code store error".to_string());
        }
        Ok(self.entries.lock().unwrap().get(email).cloned())
    }

    async fn remove(&self, email: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("code store error".to_string());
        }
        self.entries.lock().unwrap().remove(email);
        Ok(())
    }

    async fn check_and_consume(
        &self,
        email: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<CodeCheck, String> {
        if self.should_fail {
            return Err("code store error".to_string());
        }
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get(email) else {
            return Ok(CodeCheck::Missing);
        };
        let check = entry.evaluate(submitted, now);
        match check {
            CodeCheck::Consumed | CodeCheck::Expired => {
                entries.remove(email);
            }
            CodeCheck::Mismatch | CodeCheck::Missing => {}
        }
        Ok(check)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, String> {
        if self.should_fail {
            return Err("code store error".to_string());
        }
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        Ok(before - entries.len())
    }
}
