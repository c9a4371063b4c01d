//! # Quote Repository
//!
//! Database operations for quote records.
//!
//! ## Key Operations
//! - Insert with Store-assigned id and timestamp
//! - Newest-first listing
//! - Delete-and-return by id
//!
//! ## Ordering
//! ```text
//! ORDER BY saved_at DESC, rowid DESC
//!
//!   saved_at                  rowid  quote
//!   2024-05-01T12:00:02Z        3    "Veni, vidi, vici"   ← first
//!   2024-05-01T12:00:01Z        4    "Alea iacta est"     ← tie: later insert wins
//!   2024-05-01T12:00:01Z        2    "Carpe diem"
//!   2024-05-01T12:00:00Z        1    "Memento mori"
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crate::pool::ping;
use crate::store::QuoteStore;
use quotes_core::validation::validate_new_quote;
use quotes_core::{Quote, StoreError, StoreResult};

/// Repository for quote database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = QuoteRepository::new(pool);
///
/// let saved = repo.create("Carpe diem", "Horace").await?;
/// let all = repo.list().await?;
/// let removed = repo.delete_by_id(&saved.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    pool: SqlitePool,
}

impl QuoteRepository {
    /// Creates a new QuoteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        QuoteRepository { pool }
    }

    /// Inserts a fully formed record.
    ///
    /// The caller is responsible for the id and timestamp; prefer
    /// [`QuoteStore::create`], which assigns both.
    pub async fn insert(&self, quote: &Quote) -> DbResult<Quote> {
        debug!(id = %quote.id, "Inserting quote");

        sqlx::query(
            r#"
            INSERT INTO quotes (id, quote, author, saved_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&quote.id)
        .bind(&quote.quote)
        .bind(&quote.author)
        .bind(quote.saved_at)
        .execute(&self.pool)
        .await?;

        Ok(quote.clone())
    }

    /// Lists every record, newest first.
    pub async fn list_all(&self) -> DbResult<Vec<Quote>> {
        let quotes = sqlx::query_as::<_, Quote>(
            r#"
            SELECT id, quote, author, saved_at
            FROM quotes
            ORDER BY saved_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = quotes.len(), "Listed quotes");
        Ok(quotes)
    }

    /// Deletes a quote and returns what was removed.
    ///
    /// `DELETE ... RETURNING` reads and removes the row in one statement, so
    /// two concurrent deletes of the same id can't both succeed.
    ///
    /// ## Returns
    /// * `Ok(Some(Quote))` - Quote removed
    /// * `Ok(None)` - No quote with that id
    pub async fn remove(&self, id: &str) -> DbResult<Option<Quote>> {
        debug!(id = %id, "Deleting quote");

        let removed = sqlx::query_as::<_, Quote>(
            r#"
            DELETE FROM quotes
            WHERE id = ?1
            RETURNING id, quote, author, saved_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(removed)
    }

    /// Counts stored quotes (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new quote ID.
pub fn generate_quote_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl QuoteStore for QuoteRepository {
    async fn create(&self, quote: &str, author: &str) -> StoreResult<Quote> {
        let input = validate_new_quote(Some(quote), Some(author))?;
        let record = Quote::from_new(input, generate_quote_id(), Utc::now());

        debug!(id = %record.id, author = %record.author, "Creating quote");
        Ok(self.insert(&record).await?)
    }

    async fn list(&self) -> StoreResult<Vec<Quote>> {
        Ok(self.list_all().await?)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Quote> {
        self.remove(id)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn is_available(&self) -> bool {
        ping(&self.pool).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{Duration, TimeZone};
    use quotes_core::ValidationError;
    use std::collections::HashSet;

    async fn store() -> (Database, QuoteRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.quotes();
        (db, repo)
    }

    fn record(id: &str, text: &str, seconds: i64) -> Quote {
        Quote {
            id: id.to_string(),
            quote: text.to_string(),
            author: "Anonymous".to_string(),
            saved_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                + Duration::seconds(seconds),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_contains_record_once() {
        let (_db, repo) = store().await;

        let saved = repo.create("Carpe diem", "Horace").await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.quote, "Carpe diem");
        assert_eq!(saved.author, "Horace");

        let all = repo.list().await.unwrap();
        let matching: Vec<_> = all.iter().filter(|q| q.id == saved.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0], &saved);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (_db, repo) = store().await;

        let mut ids = HashSet::new();
        for i in 0..20 {
            let saved = repo.create(&format!("Quote {i}"), "Author").await.unwrap();
            assert!(ids.insert(saved.id));
        }
        assert_eq!(repo.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (_db, repo) = store().await;

        repo.insert(&record("a", "Memento mori", 0)).await.unwrap();
        repo.insert(&record("b", "Veni, vidi, vici", 2)).await.unwrap();
        repo.insert(&record("c", "Carpe diem", 1)).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_list_ties_put_later_insert_first() {
        let (_db, repo) = store().await;

        repo.insert(&record("first", "One", 5)).await.unwrap();
        repo.insert(&record("second", "Two", 5)).await.unwrap();

        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_list_orders_created_records_by_saved_at() {
        let (_db, repo) = store().await;

        for i in 0..5 {
            repo.create(&format!("Quote {i}"), "Author").await.unwrap();
        }

        let all = repo.list().await.unwrap();
        assert!(all.windows(2).all(|w| w[0].saved_at >= w[1].saved_at));
    }

    #[tokio::test]
    async fn test_create_keeps_text_exactly_as_given() {
        let (_db, repo) = store().await;

        let saved = repo.create("  Carpe diem ", " Horace").await.unwrap();
        assert_eq!(saved.quote, "  Carpe diem ");
        assert_eq!(saved.author, " Horace");

        let matching = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|q| q.quote == "  Carpe diem " && q.author == " Horace")
            .count();
        assert_eq!(matching, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields_without_writing() {
        let (_db, repo) = store().await;

        let err = repo.create("", "Horace").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { ref field }) if field == "quote"
        ));

        let err = repo.create("Carpe diem", "   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found_and_changes_nothing() {
        let (_db, repo) = store().await;
        let kept = repo.create("Carpe diem", "Horace").await.unwrap();

        let err = repo.delete_by_id("does-not-exist").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "does-not-exist"));

        assert_eq!(repo.list().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_record() {
        let (_db, repo) = store().await;
        let keep = repo.create("Memento mori", "Seneca").await.unwrap();
        let gone = repo.create("Carpe diem", "Horace").await.unwrap();

        let removed = repo.delete_by_id(&gone.id).await.unwrap();
        assert_eq!(removed, gone);

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![keep]);
        assert_eq!(repo.count().await.unwrap(), 1);

        // Second delete of the same id
        let err = repo.delete_by_id(&gone.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deletes_of_same_id_remove_it_once() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("quotes.db").display());
        let db = Database::new(DbConfig::new(url).max_connections(4))
            .await
            .unwrap();
        let repo = db.quotes();

        for i in 0..10 {
            let saved = repo.create(&format!("Quote {i}"), "Author").await.unwrap();

            let (a, b) = tokio::join!(
                repo.delete_by_id(&saved.id),
                repo.delete_by_id(&saved.id)
            );

            let removed: Vec<_> = [&a, &b].into_iter().filter(|r| r.is_ok()).collect();
            assert_eq!(removed.len(), 1, "exactly one delete wins");
            assert_eq!(removed[0].as_ref().unwrap(), &saved);

            let loser = if a.is_err() { a } else { b };
            assert!(matches!(loser, Err(StoreError::NotFound { .. })));
        }

        assert_eq!(repo.count().await.unwrap(), 0);
        db.close().await;
    }

    #[tokio::test]
    async fn test_closed_pool_is_storage_unavailable() {
        let (db, repo) = store().await;
        assert!(repo.is_available().await);

        db.close().await;

        assert!(!repo.is_available().await);
        assert!(matches!(
            repo.list().await.unwrap_err(),
            StoreError::StorageUnavailable(_)
        ));
        assert!(matches!(
            repo.create("Carpe diem", "Horace").await.unwrap_err(),
            StoreError::StorageUnavailable(_)
        ));
        assert!(matches!(
            repo.delete_by_id("any").await.unwrap_err(),
            StoreError::StorageUnavailable(_)
        ));
    }
}
