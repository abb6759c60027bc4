//! Pinrelay Server
//!
//! Main entry point for the upload forwarding service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinrelay_api::{AppState, create_router};
use pinrelay_core::forward::Dispatcher;
use pinrelay_shared::{AppConfig, ProvidersConfig};

/// Logs which providers have credentials, never the values themselves.
fn log_provider_credentials(providers: &ProvidersConfig) {
    info!(
        dolpin = !providers.dolpin.api_token.is_empty(),
        cloudinary = !providers.cloudinary.api_secret.is_empty(),
        pinata = !providers.pinata.jwt.is_empty(),
        starton = !providers.starton.api_key.is_empty(),
        "Provider credentials configured"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinrelay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    log_provider_credentials(&config.providers);

    // One pooled client shared by every adapter
    let client = reqwest::Client::builder().build()?;
    let dispatcher = Dispatcher::from_config(client, &config.providers);

    let state = AppState {
        dispatcher: Arc::new(dispatcher),
        body_limit_bytes: config.server.body_limit_bytes,
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
