//! `GET /api/random-quote`: a fresh, unsaved quote from the provider.

use std::sync::Arc;

use axum::{extract::State, Json};
use quotes_core::QuoteDraft;

use crate::error::ApiResult;
use crate::AppState;

pub async fn random_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuoteDraft>> {
    let draft = state.random_quotes.fetch().await?;
    Ok(Json(draft))
}
