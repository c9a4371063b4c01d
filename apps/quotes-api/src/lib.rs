//! # Quote Keeper API
//!
//! HTTP surface over the Quote Store.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Client ──► TraceLayer ──► TimeoutLayer ──► CorsLayer ──► Router       │
//! │                                                          │              │
//! │                                 ┌────────────────────────┤              │
//! │                                 ▼                        ▼              │
//! │                          dyn QuoteStore          RandomQuoteClient     │
//! │                          (SQLite pool)           (reqwest)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers only see [`AppState`], so tests can swap the Store for any
//! [`QuoteStore`] implementation.

pub mod config;
pub mod error;
pub mod provider;
pub mod routes;

use std::sync::Arc;

use quotes_db::QuoteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use provider::{ProviderError, RandomQuoteClient};
pub use routes::app_router;

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn QuoteStore>,
    pub random_quotes: RandomQuoteClient,
}

impl AppState {
    pub fn new(store: Arc<dyn QuoteStore>, random_quotes: RandomQuoteClient) -> Self {
        AppState {
            store,
            random_quotes,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the API and store log at `info`
/// and HTTP request spans at `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quotes_api=info,quotes_db=info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
