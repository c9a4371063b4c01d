//! Client for the external random-quote provider.
//!
//! The provider answers `GET <url>` with `{"content": "...", "author": "..."}`.
//! Every call goes to the network; nothing is cached or retried.

use std::time::Duration;

use quotes_core::QuoteDraft;
use serde::Deserialize;
use tracing::debug;

/// Upper bound on a single provider round trip.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned an unusable quote: {0}")]
    Shape(String),
}

/// Wire shape of the provider response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ProviderQuote {
    content: Option<String>,
    author: Option<String>,
}

/// Fetches fresh random quotes.
#[derive(Debug, Clone)]
pub struct RandomQuoteClient {
    http: reqwest::Client,
    url: String,
}

impl RandomQuoteClient {
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()?;

        Ok(RandomQuoteClient {
            http,
            url: url.into(),
        })
    }

    /// Fetches one random quote as an unsaved draft.
    pub async fn fetch(&self) -> Result<QuoteDraft, ProviderError> {
        debug!(url = %self.url, "Fetching random quote");

        let body: ProviderQuote = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        into_draft(body)
    }
}

fn into_draft(body: ProviderQuote) -> Result<QuoteDraft, ProviderError> {
    let quote = body
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ProviderError::Shape("missing content".to_string()))?;
    let author = body
        .author
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| ProviderError::Shape("missing author".to_string()))?;

    Ok(QuoteDraft { quote, author })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_draft_maps_content_to_quote() {
        let draft = into_draft(ProviderQuote {
            content: Some("Carpe diem".to_string()),
            author: Some("Horace".to_string()),
        })
        .unwrap();

        assert_eq!(draft.quote, "Carpe diem");
        assert_eq!(draft.author, "Horace");
    }

    #[test]
    fn test_into_draft_rejects_missing_fields() {
        let err = into_draft(ProviderQuote {
            content: None,
            author: Some("Horace".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, ProviderError::Shape(_)));

        let err = into_draft(ProviderQuote {
            content: Some("Carpe diem".to_string()),
            author: Some(" ".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, ProviderError::Shape(_)));
    }
}
