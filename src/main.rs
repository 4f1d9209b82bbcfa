use std::sync::Arc;

use anyhow::Context;
use dispatch_api::config;
use dispatch_api::database::DatabaseConnection;
use dispatch_api::handlers::RequestHandler;
use dispatch_api::server::{app, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    config.validate().context("invalid configuration")?;
    tracing::info!("Starting dispatch API in {:?} mode", config.environment);

    let db = Arc::new(DatabaseConnection::from_config(&config.database));
    db.connect().await.context("failed to connect to database")?;

    let state = AppState {
        handler: Arc::new(RequestHandler::new(config, db.clone())),
        max_body_bytes: config.api.max_request_size_bytes,
    };

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Dispatch API listening on http://{}", bind_addr);

    let served = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.disconnect().await;
    served.context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
