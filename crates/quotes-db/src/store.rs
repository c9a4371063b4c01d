//! # Quote Store Contract
//!
//! The three operations every durable quote collection supports. The HTTP
//! layer only ever sees `Arc<dyn QuoteStore>`, so tests can swap the SQLite
//! repository for an in-memory double.

use async_trait::async_trait;
use quotes_core::{Quote, StoreResult};

/// Durable collection of quote records.
///
/// ## Contract
/// ```text
/// create(quote, author)  → Quote          | Validation | StorageUnavailable
/// list()                 → Vec<Quote>     |              StorageUnavailable
/// delete_by_id(id)       → Quote          | NotFound   | StorageUnavailable
/// ```
///
/// Every operation is all-or-nothing. Nothing is retried.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persists a new quote, assigning `id` and `saved_at`.
    ///
    /// Blank `quote` or `author` fails with `StoreError::Validation` and
    /// leaves the collection unchanged.
    async fn create(&self, quote: &str, author: &str) -> StoreResult<Quote>;

    /// Returns every record, most recently saved first.
    async fn list(&self) -> StoreResult<Vec<Quote>>;

    /// Removes the record with this id and returns it.
    async fn delete_by_id(&self, id: &str) -> StoreResult<Quote>;

    /// Whether the durable medium currently answers queries.
    async fn is_available(&self) -> bool;
}
