//! CORS middleware configuration for cross-origin requests.
//!
//! The login form is served from a separate origin, so the API accepts
//! cross-origin requests from any origin, mirroring the reference server's
//! open CORS policy.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates the CORS middleware for the OTP endpoints.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}
