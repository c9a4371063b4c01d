//! # Quote Keeper API Server
//!
//! ```text
//! load config ──► init tracing ──► open SQLite (+ migrations)
//!       ──► build router ──► serve until Ctrl+C / SIGTERM ──► close pool
//! ```

use std::sync::Arc;

use anyhow::Context;
use quotes_api::{app_router, init_tracing, AppState, RandomQuoteClient, ServerConfig};
use quotes_db::{Database, DbConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Quote Keeper API server...");

    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        port = config.port,
        db_url = %config.database_url,
        provider = %config.random_quote_url,
        "Configuration loaded"
    );

    let db = Database::new(DbConfig::new(&config.database_url))
        .await
        .context("Failed to open quote database")?;
    if !db.health_check().await {
        anyhow::bail!("Quote database did not answer the health check");
    }
    info!("Database ready");

    let random_quotes = RandomQuoteClient::new(&config.random_quote_url)
        .context("Failed to build random-quote client")?;

    let state = Arc::new(AppState::new(Arc::new(db.quotes()), random_quotes));
    let app = app_router(state, &config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
