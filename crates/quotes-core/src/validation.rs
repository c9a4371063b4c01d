//! # Validation Module
//!
//! Input validation for quote creation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: API handler (quotes-api)                                     │
//! │  ├── Body must be JSON                                                 │
//! │  └── THIS MODULE: quote/author present and non-blank                   │
//! │           │          (fails fast, Store never called)                  │
//! │           ▼                                                             │
//! │  Layer 2: Quote Store (quotes-db)                                      │
//! │  └── THIS MODULE again, as a backstop for direct Store callers         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (length(trim(...)) > 0)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same input, same result, no I/O.

use crate::error::ValidationError;
use crate::types::NewQuote;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates quotation text.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Returns
/// The text exactly as given. Surrounding whitespace only matters for the
/// blank check; it is never stripped.
///
/// ## Example
/// ```rust
/// use quotes_core::validation::validate_quote_text;
///
/// assert_eq!(validate_quote_text("  Carpe diem ").unwrap(), "  Carpe diem ");
/// assert!(validate_quote_text("").is_err());
/// ```
pub fn validate_quote_text(quote: &str) -> ValidationResult<&str> {
    non_blank("quote", quote)
}

/// Validates an author name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Returns
/// The name exactly as given.
pub fn validate_author(author: &str) -> ValidationResult<&str> {
    non_blank("author", author)
}

fn non_blank<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(value)
}

// =============================================================================
// Creation Input
// =============================================================================

/// Validates a creation request whose fields may be absent.
///
/// `quote` is checked before `author`; the first failure is returned.
///
/// ## User Workflow
/// ```text
/// POST /api/quotes {"quote": "Carpe diem"}
///      │
///      ▼
/// validate_new_quote(Some("Carpe diem"), None) ← THIS FUNCTION
///      │
///      ├── quote missing/blank?  → Required { field: "quote" }
///      ├── author missing/blank? → Required { field: "author" }  ◄── here
///      │
///      └── OK → NewQuote → Store.create
/// ```
pub fn validate_new_quote(
    quote: Option<&str>,
    author: Option<&str>,
) -> ValidationResult<NewQuote> {
    let quote = validate_quote_text(quote.unwrap_or_default())?;
    let author = validate_author(author.unwrap_or_default())?;

    Ok(NewQuote::new_unchecked(quote.to_string(), author.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quote_text() {
        assert_eq!(validate_quote_text("Carpe diem").unwrap(), "Carpe diem");
        assert_eq!(validate_quote_text("  padded  ").unwrap(), "  padded  ");

        assert!(validate_quote_text("").is_err());
        assert!(validate_quote_text("   ").is_err());
        assert!(validate_quote_text("\n\t").is_err());
    }

    #[test]
    fn test_validate_author() {
        assert!(validate_author("Horace").is_ok());
        assert_eq!(
            validate_author("").unwrap_err(),
            ValidationError::required("author")
        );
    }

    #[test]
    fn test_validate_new_quote_accepts_complete_input() {
        let input = validate_new_quote(Some(" Carpe diem "), Some("Horace\n")).unwrap();
        assert_eq!(input.quote(), " Carpe diem ");
        assert_eq!(input.author(), "Horace\n");
    }

    #[test]
    fn test_validate_new_quote_missing_fields() {
        assert_eq!(
            validate_new_quote(None, Some("Horace")).unwrap_err(),
            ValidationError::required("quote")
        );
        assert_eq!(
            validate_new_quote(Some("Carpe diem"), None).unwrap_err(),
            ValidationError::required("author")
        );
        // Quote is reported first when both are missing
        assert_eq!(
            validate_new_quote(None, None).unwrap_err(),
            ValidationError::required("quote")
        );
    }

    #[test]
    fn test_validate_new_quote_empty_fields() {
        assert!(validate_new_quote(Some(""), Some("Horace")).is_err());
        assert!(validate_new_quote(Some("Carpe diem"), Some("  ")).is_err());
    }
}
