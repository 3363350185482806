use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use otp_api::app::create_app;
use otp_api::config::AppConfig;
use otp_api::routes::otp::AppState;
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_infra::email::create_email_service;
use otp_infra::store::InMemoryCodeStore;
use otp_infra::sweeper::{ExpirySweeper, SweeperConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Productr OTP server");

    let config = AppConfig::from_env();

    let email_service = Arc::new(
        create_email_service(config.use_mock_email).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?,
    );
    if config.use_mock_email {
        info!("Using mock email service; codes are logged, not sent");
    } else {
        // The send-otp response echoes the raw code even with real delivery
        // configured; front this API with care in production deployments.
        warn!("SendGrid delivery configured; note that /api/send-otp echoes the code in its response");
    }

    let code_store = Arc::new(InMemoryCodeStore::new());

    let otp_service = Arc::new(OtpService::new(
        email_service,
        code_store.clone(),
        OtpServiceConfig {
            code_expiration_minutes: config.code_ttl_minutes,
        },
    ));

    ExpirySweeper::new(
        code_store,
        SweeperConfig {
            interval_seconds: config.sweep_interval_secs.max(1),
            enabled: config.sweep_interval_secs > 0,
        },
    )
    .spawn();

    let app_state = web::Data::new(AppState {
        otp_service: otp_service.clone(),
    });

    let bind_address = config.bind_address();
    info!(address = %bind_address, "Server will bind");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
