//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use quotes_api::{app_router, AppState, RandomQuoteClient, ServerConfig};
use quotes_core::{Quote, StoreError, StoreResult};
use quotes_db::{Database, DbConfig, QuoteStore};
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory SQLite store.
pub async fn sqlite_app() -> (Database, Router) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let app = app_with_store(Arc::new(db.quotes()), "http://127.0.0.1:9/random");
    (db, app)
}

pub fn app_with_store(store: Arc<dyn QuoteStore>, provider_url: &str) -> Router {
    let config = ServerConfig {
        random_quote_url: provider_url.to_string(),
        ..ServerConfig::default()
    };
    let client = RandomQuoteClient::new(provider_url).unwrap();
    app_router(Arc::new(AppState::new(store, client)), &config)
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Store whose every operation fails as if the medium were down.
/// Counts calls so tests can assert the Store was never reached.
#[derive(Default)]
pub struct BrokenStore {
    pub calls: AtomicUsize,
}

impl BrokenStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::unavailable("connection refused (os error 111)"))
    }
}

#[async_trait]
impl QuoteStore for BrokenStore {
    async fn create(&self, _quote: &str, _author: &str) -> StoreResult<Quote> {
        self.fail()
    }

    async fn list(&self) -> StoreResult<Vec<Quote>> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: &str) -> StoreResult<Quote> {
        self.fail()
    }

    async fn is_available(&self) -> bool {
        false
    }
}

/// Starts a local stand-in for the random-quote provider and returns its URL.
pub async fn spawn_provider(body: Value) -> String {
    let stub = Router::new().route(
        "/random",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub).await.unwrap();
    });

    format!("http://{addr}/random")
}
