//! Domain layer - entities and value types for the OTP lifecycle.

pub mod entities;

pub use entities::*;
