//! # API Error Type
//!
//! The single place where internal failures become HTTP statuses.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Quote Keeper                           │
//! │                                                                         │
//! │  StoreError::Validation          ──► 400 {"error": "quote is required"} │
//! │  StoreError::NotFound            ──► 404 {"error": "Quote not found"}   │
//! │  StoreError::StorageUnavailable  ──► 500 {"error": "Failed to ..."}     │
//! │        │                                                                │
//! │        └── detail goes to tracing::error!, never to the body            │
//! │                                                                         │
//! │  ProviderError                   ──► 502 {"error": "Failed to fetch     │
//! │                                              random quote"}             │
//! │  Store not ready                 ──► 503                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quotes_core::{StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

use crate::provider::ProviderError;

/// API error returned from HTTP handlers.
///
/// The `Display` text of each variant is exactly what the client sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected (400)
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Storage fault (500). Carries the generic client-facing message only.
    #[error("{0}")]
    Internal(String),

    /// Upstream provider failed (502)
    #[error("{0}")]
    BadGateway(String),

    /// Dependency not ready (503)
    #[error("{0}")]
    Unavailable(String),
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Maps a Store failure, using `fault_message` for storage faults.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.store.list().await.map_err(ApiError::store("Failed to fetch quotes"))?;
    /// ```
    pub fn store(fault_message: &'static str) -> impl FnOnce(StoreError) -> ApiError {
        move |err| match err {
            StoreError::Validation(e) => ApiError::from(e),
            StoreError::NotFound { id } => {
                tracing::debug!(%id, "Quote not found");
                ApiError::NotFound("Quote not found".to_string())
            }
            StoreError::StorageUnavailable(detail) => {
                // Log the actual error but return a generic message
                tracing::error!(%detail, "{}", fault_message);
                ApiError::Internal(fault_message.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        tracing::warn!(error = %err, "Random quote provider failed");
        ApiError::BadGateway("Failed to fetch random quote".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_statuses() {
        let err = ApiError::store("Failed to save quote")(ValidationError::required("quote").into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "quote is required");

        let err = ApiError::store("Failed to delete quote")(StoreError::not_found("x"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::store("Failed to fetch quotes")(StoreError::unavailable(
            "disk I/O error at /var/lib/quotes.db",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Internal detail never reaches the client
        assert_eq!(err.to_string(), "Failed to fetch quotes");
    }
}
