//! Domain entities

pub mod pending_code;

pub use pending_code::{CodeCheck, PendingCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
