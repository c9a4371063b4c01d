//! # Domain Types
//!
//! The quote record and the inputs that lead to one.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   QuoteDraft    │   │    NewQuote     │   │      Quote      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  quote          │──►│  quote  (valid) │──►│  id (UUID)      │       │
//! │  │  author         │   │  author (valid) │   │  quote, author  │       │
//! │  │  (not saved)    │   │                 │   │  saved_at       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     from provider        from validation        from the Store         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! `Quote` serializes as `{id, quote, author, savedAt}`. The field names are
//! relied on by the display client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Quote
// =============================================================================

/// A persisted quotation.
///
/// `id` and `saved_at` are assigned by the Store at creation time. Records
/// are never updated; they are only listed and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    /// Unique identifier (UUID v4). Never reused after deletion.
    pub id: String,

    /// The quotation text.
    pub quote: String,

    /// The attributed author.
    pub author: String,

    /// When the Store persisted the record. Used only for ordering.
    #[ts(as = "String")]
    pub saved_at: DateTime<Utc>,
}

impl Quote {
    /// Builds a record from validated input plus Store-assigned metadata.
    pub fn from_new(input: NewQuote, id: String, saved_at: DateTime<Utc>) -> Self {
        let (quote, author) = input.into_parts();
        Quote {
            id,
            quote,
            author,
            saved_at,
        }
    }
}

// =============================================================================
// NewQuote
// =============================================================================

/// Validated input for creating a quote.
///
/// Only obtainable through [`crate::validation::validate_new_quote`], so
/// holding one proves both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    quote: String,
    author: String,
}

impl NewQuote {
    pub(crate) fn new_unchecked(quote: String, author: String) -> Self {
        NewQuote { quote, author }
    }

    /// The quotation text.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// The attributed author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Consumes the input, returning `(quote, author)`.
    pub fn into_parts(self) -> (String, String) {
        (self.quote, self.author)
    }
}

// =============================================================================
// QuoteDraft
// =============================================================================

/// A quote fetched from the random-quote provider that has not been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteDraft {
    pub quote: String,
    pub author: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Quote {
        Quote::from_new(
            NewQuote::new_unchecked("Carpe diem".to_string(), "Horace".to_string()),
            "6f1c2d1e-0000-4000-8000-000000000001".to_string(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_quote_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["id"], "6f1c2d1e-0000-4000-8000-000000000001");
        assert_eq!(json["quote"], "Carpe diem");
        assert_eq!(json["author"], "Horace");
        assert_eq!(json["savedAt"], "2024-05-01T12:00:00Z");
        assert!(json.get("saved_at").is_none());
    }

    #[test]
    fn test_from_new_keeps_input_text() {
        let quote = sample();
        assert_eq!(quote.quote, "Carpe diem");
        assert_eq!(quote.author, "Horace");
    }
}
