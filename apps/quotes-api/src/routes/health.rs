//! Liveness and readiness probes.
//!
//! `/api/health` answers as long as the process is serving HTTP; it never
//! touches the Store. `/api/ready` asks the Store whether the durable
//! medium answers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub const HEALTH_STATUS: &str = "Server is running!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Liveness: always 200.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: HEALTH_STATUS.to_string(),
    })
}

/// Readiness: 200 when the Store is reachable, 503 otherwise.
pub async fn ready(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatusResponse>> {
    if !state.store.is_available().await {
        return Err(ApiError::Unavailable("Storage is not available".to_string()));
    }

    Ok(Json(StatusResponse {
        status: "ready".to_string(),
    }))
}
