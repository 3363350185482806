//! # Productr OTP API
//!
//! HTTP layer for the OTP backend: request/response DTOs, route handlers
//! generic over the core service traits, CORS setup, and the application
//! factory used by both the binary and the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod routes;
