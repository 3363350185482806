//! Handler for POST /api/send-otp

use actix_web::{web, HttpResponse};
use tracing::error;
use validator::Validate;

use otp_core::errors::OtpError;
use otp_core::services::otp::{CodeStoreTrait, EmailServiceTrait};

use crate::dto::{SendOtpRequest, SendOtpResponse, StatusResponse};

use super::AppState;

/// Issues a verification code for an email address and requests delivery.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
///
/// * 200 - `{ "success": true, "message": ..., "otp": "482913" }`. The raw
///   code is always echoed, with the message noting whether email delivery
///   succeeded.
/// * 400 - missing or empty email
/// * 500 - internal fault; generic message only
pub async fn send_otp<N, S>(
    state: web::Data<AppState<N, S>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    N: EmailServiceTrait + 'static,
    S: CodeStoreTrait + 'static,
{
    if request.0.validate().is_err() {
        return HttpResponse::BadRequest().json(StatusResponse::error("Email is required"));
    }

    match state.otp_service.issue_code(&request.email).await {
        Ok(result) => {
            let message = if result.delivered {
                "OTP sent successfully to your email"
            } else {
                "OTP generated (Email failed)"
            };
            HttpResponse::Ok().json(SendOtpResponse {
                success: true,
                message: message.to_string(),
                otp: result.code,
            })
        }
        Err(OtpError::InvalidRequest { .. }) => {
            HttpResponse::BadRequest().json(StatusResponse::error("Email is required"))
        }
        Err(err @ OtpError::Internal { .. }) => {
            // Detail stays in the log; the caller gets a generic message
            error!(error = %err, "send-otp failed");
            HttpResponse::InternalServerError().json(StatusResponse::error(
                "Failed to generate OTP. Please try again.",
            ))
        }
    }
}
