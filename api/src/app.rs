//! Application factory
//!
//! Builds the actix-web application with state, CORS, request logging, and
//! the OTP routes. Used by the binary and by the integration tests.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use otp_core::services::otp::{CodeStoreTrait, EmailServiceTrait};

use crate::dto::StatusResponse;
use crate::middleware::cors::create_cors;
use crate::routes::health::health;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<N, S>(
    app_state: web::Data<AppState<N, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: EmailServiceTrait + 'static,
    S: CodeStoreTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(send_otp::<N, S>))
                .route("/verify-otp", web::post().to(verify_otp::<N, S>))
                .route("/health", web::get().to(health)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(StatusResponse::error(
        "The requested resource was not found",
    ))
}
