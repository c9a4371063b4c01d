//! # quotes-core: Pure Domain Logic for Quote Keeper
//!
//! This crate holds the quote record, the validated creation input, and the
//! error taxonomy shared by the Store and the API. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Keeper Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Display client (browser)                     │   │
//! │  │        Random quote ──► Save ──► Saved list ──► Delete          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quotes-api (axum)                            │   │
//! │  │        list_quotes, create_quote, delete_quote, health          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quotes-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │      ┌───────────┐     ┌──────────────┐     ┌───────────┐      │   │
//! │  │      │   types   │     │  validation  │     │   error   │      │   │
//! │  │      │   Quote   │     │ NewQuote     │     │ StoreError│      │   │
//! │  │      └───────────┘     └──────────────┘     └───────────┘      │   │
//! │  │                                                                 │   │
//! │  │              NO I/O • NO DATABASE • NO NETWORK                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    quotes-db (Quote Store)                      │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Quote` record and the `NewQuote` creation input
//! - [`error`] - `ValidationError` and `StoreError`
//! - [`validation`] - Pure validation run before any Store call
//!
//! ## Example Usage
//!
//! ```rust
//! use quotes_core::validation::validate_new_quote;
//!
//! let input = validate_new_quote(Some("Carpe diem"), Some("Horace")).unwrap();
//! assert_eq!(input.author(), "Horace");
//!
//! assert!(validate_new_quote(Some(""), Some("Horace")).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult, ValidationError};
pub use types::*;
