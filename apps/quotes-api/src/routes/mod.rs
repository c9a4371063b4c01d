//! # HTTP Routes
//!
//! ```text
//! GET    /api/quotes          list_quotes
//! POST   /api/quotes          create_quote
//! DELETE /api/quotes/{id}     delete_quote
//! GET    /api/health          health        (liveness, no Store access)
//! GET    /api/ready           ready         (readiness)
//! GET    /api/random-quote    random_quote  (provider proxy, never saved)
//! ```

pub mod health;
pub mod quotes;
pub mod random;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use crate::config::ServerConfig;
use crate::AppState;

/// Builds the full application router with middleware.
pub fn app_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route(
            "/quotes",
            get(quotes::list_quotes).post(quotes::create_quote),
        )
        .route("/quotes/{id}", delete(quotes::delete_quote))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/random-quote", get(random::random_quote));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    // Origins were validated when the config was loaded
    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
