//! # Quote Handlers
//!
//! `GET /api/quotes`, `POST /api/quotes`, `DELETE /api/quotes/{id}`.
//!
//! ## Create Flow
//! ```text
//! POST /api/quotes {"quote": "...", "author": "..."}
//!      │
//!      ▼
//! Body is JSON? ── no ──► 400
//!      │
//!      ▼
//! validate_new_quote ── blank/missing ──► 400   (Store never called)
//!      │
//!      ▼
//! store.create ── StorageUnavailable ──► 500 "Failed to save quote"
//!      │
//!      ▼
//! 201 {id, quote, author, savedAt}
//! ```

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use quotes_core::validation::validate_new_quote;
use quotes_core::Quote;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of `POST /api/quotes`.
///
/// Fields are optional so a missing field is reported as a validation
/// error rather than a deserialization failure. A client-supplied
/// `savedAt` is not read; the Store assigns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Body of a successful `DELETE /api/quotes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuoteResponse {
    pub message: String,
    pub deleted_quote: Quote,
}

/// Lists saved quotes, most recent first.
pub async fn list_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state
        .store
        .list()
        .await
        .map_err(ApiError::store("Failed to fetch quotes"))?;

    Ok(Json(quotes))
}

/// Saves a quote.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let input = validate_new_quote(request.quote.as_deref(), request.author.as_deref())?;

    let saved = state
        .store
        .create(input.quote(), input.author())
        .await
        .map_err(ApiError::store("Failed to save quote"))?;

    info!(id = %saved.id, author = %saved.author, "Quote saved");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Deletes a saved quote by id.
pub async fn delete_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteQuoteResponse>> {
    let deleted = state
        .store
        .delete_by_id(&id)
        .await
        .map_err(ApiError::store("Failed to delete quote"))?;

    info!(id = %deleted.id, "Quote deleted");
    Ok(Json(DeleteQuoteResponse {
        message: "Quote deleted successfully".to_string(),
        deleted_quote: deleted,
    }))
}
