//! Health check endpoint

use actix_web::HttpResponse;

use crate::dto::HealthResponse;

/// Handler for GET /api/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
