//! OTP service module for email-based login verification
//!
//! This module provides the complete one-time passcode workflow:
//! - Code generation and delivery via an injected email service
//! - Transient storage behind the code store contract
//! - Single-use verification with lazy expiry

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{CodeStoreTrait, EmailServiceTrait};
pub use types::{IssueCodeResult, VerifyOutcome};
