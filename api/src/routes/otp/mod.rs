//! OTP endpoint handlers

use std::sync::Arc;

use otp_core::services::otp::{CodeStoreTrait, EmailServiceTrait, OtpService};

pub mod send_otp;
pub mod verify_otp;

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state holding the shared OTP service
pub struct AppState<N, S>
where
    N: EmailServiceTrait,
    S: CodeStoreTrait,
{
    pub otp_service: Arc<OtpService<N, S>>,
}
