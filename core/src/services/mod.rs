//! Business services for the OTP workflow.

pub mod otp;

pub use otp::*;
