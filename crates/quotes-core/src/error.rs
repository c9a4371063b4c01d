//! # Error Types
//!
//! Domain-specific error types for quotes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quotes-core errors (this file)                                        │
//! │  ├── ValidationError  - Caller supplied incomplete input               │
//! │  └── StoreError       - Outcome of a Store operation                   │
//! │                                                                         │
//! │  quotes-db errors (separate crate)                                     │
//! │  └── DbError          - sqlx failures, folded into StorageUnavailable  │
//! │                                                                         │
//! │  quotes-api errors (in app)                                            │
//! │  └── ApiError         - What the HTTP client sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → HTTP status           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The Store never produces protocol-shaped errors. Only `quotes-api`
//! decides which status code a `StoreError` becomes.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a caller supplies input that doesn't meet
/// requirements. Always recoverable by correcting the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, empty, or only whitespace.
    #[error("{field} is required")]
    Required { field: String },
}

impl ValidationError {
    /// Creates a `Required` error for the given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures of the Quote Store operations.
///
/// ## Recoverability
/// ```text
/// Validation          → caller fixes input and retries
/// NotFound            → caller refreshes its view of the collection
/// StorageUnavailable  → nothing the caller can do; surfaced as a server fault
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before touching the durable medium.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No live record carries this id.
    #[error("Quote not found: {id}")]
    NotFound { id: String },

    /// The durable medium could not be reached, read, or written.
    ///
    /// The message is for logs only and must not reach HTTP clients.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Creates a StorageUnavailable error.
    pub fn unavailable(detail: impl Into<String>) -> Self {
        StoreError::StorageUnavailable(detail.into())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("quote");
        assert_eq!(err.to_string(), "quote is required");
    }

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::not_found("abc");
        assert_eq!(err.to_string(), "Quote not found: abc");

        let err = StoreError::unavailable("pool closed");
        assert_eq!(err.to_string(), "Storage unavailable: pool closed");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let store_err: StoreError = ValidationError::required("author").into();
        assert!(matches!(
            store_err,
            StoreError::Validation(ValidationError::Required { ref field }) if field == "author"
        ));
    }
}
