//! # Repository Module
//!
//! SQLite implementations of the Store contract.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.list()        (Arc<dyn QuoteStore>)               │
//! │       ▼                                                                 │
//! │  QuoteRepository                                                       │
//! │  ├── create(&self, quote, author)                                      │
//! │  ├── list(&self)                                                       │
//! │  └── delete_by_id(&self, id)                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`QuoteRepository`](quote::QuoteRepository) - Quote create, list, delete

pub mod quote;
