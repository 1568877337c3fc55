//! Slack Verifier Service - signature-checked webhook endpoint
//!
//! This is the main entry point for the slack-verifier service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slack_verifier_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,slack_verifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Slack Verifier Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        webhook_path = %config.webhook_path,
        signing_secret_configured = %config.signing_secret.is_some(),
        "Service configuration loaded"
    );

    let state = AppState::new(config.clone())?;
    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
