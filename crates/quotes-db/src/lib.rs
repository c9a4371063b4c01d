//! # quotes-db: Quote Store for Quote Keeper
//!
//! This crate provides durable storage for quote records.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quote Keeper Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (create_quote)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     quotes-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  QuoteStore   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (store.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │      ▲        │    │              │  │   │
//! │  │   │ SqlitePool    │    │      │ impl   │    │ 001_create_  │  │   │
//! │  │   │ open / close  │◄───│ QuoteRepo     │    │ quotes.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (WAL mode)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, configuration and shutdown
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - The `QuoteStore` contract
//! - [`repository`] - SQLite implementation of the contract
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quotes_db::{Database, DbConfig, QuoteStore};
//!
//! let db = Database::new(DbConfig::new("sqlite://quotes.db")).await?;
//!
//! let saved = db.quotes().create("Carpe diem", "Horace").await?;
//! let all = db.quotes().list().await?;
//! db.quotes().delete_by_id(&saved.id).await?;
//!
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::quote::QuoteRepository;
pub use store::QuoteStore;
