//! # Productr OTP Core
//!
//! Core business logic for email-based one-time passcode verification.
//! This crate contains the `PendingCode` domain entity, the code store and
//! notifier contracts, the OTP service (issuance and verification), and the
//! error types shared across the backend.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
