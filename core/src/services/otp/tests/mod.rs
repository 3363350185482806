//! Unit tests for the OTP service

mod mocks;
