//! Handler for POST /api/verify-otp

use actix_web::{web, HttpResponse};
use tracing::error;
use validator::Validate;

use otp_core::errors::OtpError;
use otp_core::services::otp::{CodeStoreTrait, EmailServiceTrait, VerifyOutcome};

use crate::dto::{StatusResponse, VerifyOtpRequest};

use super::AppState;

/// Verifies a submitted code for an email address.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "482913" }
/// ```
///
/// # Responses
///
/// * 200 - `{ "success": true, "message": "OTP verified successfully" }`
/// * 400 - missing fields, no pending code, expired code, or wrong code
/// * 500 - internal fault; generic message only
pub async fn verify_otp<N, S>(
    state: web::Data<AppState<N, S>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    N: EmailServiceTrait + 'static,
    S: CodeStoreTrait + 'static,
{
    if request.0.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(StatusResponse::error("Email and OTP are required"));
    }

    match state
        .otp_service
        .verify_code(&request.email, &request.otp)
        .await
    {
        Ok(VerifyOutcome::Verified) => {
            HttpResponse::Ok().json(StatusResponse::ok("OTP verified successfully"))
        }
        Ok(VerifyOutcome::NoSuchRequest) => HttpResponse::BadRequest().json(
            StatusResponse::error("No OTP found for this email. Please request a new one."),
        ),
        Ok(VerifyOutcome::Expired) => HttpResponse::BadRequest().json(StatusResponse::error(
            "OTP has expired. Please request a new one.",
        )),
        Ok(VerifyOutcome::Mismatch) => {
            HttpResponse::BadRequest().json(StatusResponse::error("Invalid OTP. Please try again."))
        }
        Err(OtpError::InvalidRequest { .. }) => HttpResponse::BadRequest()
            .json(StatusResponse::error("Email and OTP are required")),
        Err(err @ OtpError::Internal { .. }) => {
            error!(error = %err, "verify-otp failed");
            HttpResponse::InternalServerError().json(StatusResponse::error(
                "Failed to verify OTP. Please try again.",
            ))
        }
    }
}
