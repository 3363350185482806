//! # Infrastructure Layer
//!
//! Concrete implementations behind the contracts defined in `otp_core`:
//!
//! - **Store**: in-memory code store, process-lifetime scoped
//! - **Email**: SendGrid HTTP delivery and a console-logging mock
//! - **Sweeper**: periodic purge of expired entries

use thiserror::Error;

pub mod email;
pub mod store;
pub mod sweeper;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfraError {
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider failure
    #[error("Email service error: {0}")]
    Email(String),
}
