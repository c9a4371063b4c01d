//! Server configuration module.
//!
//! Configuration is loaded from environment variables (and an optional
//! `.env` file) with fallback to defaults.
//!
//! | Env var              | Default                          |
//! |----------------------|----------------------------------|
//! | `PORT`               | `3001`                           |
//! | `DATABASE_URL`       | `sqlite://quotes.db`             |
//! | `RANDOM_QUOTE_URL`   | `https://api.quotable.io/random` |
//! | `CORS_ALLOW_ORIGINS` | `*`                              |
//! | `REQUEST_TIMEOUT_MS` | `30000`                          |

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://quotes.db";
pub const DEFAULT_RANDOM_QUOTE_URL: &str = "https://api.quotable.io/random";
pub const DEFAULT_CORS_ALLOW_ORIGINS: &str = "*";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Quote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listening port
    pub port: u16,

    /// Connection string for the durable medium
    pub database_url: String,

    /// Endpoint of the random-quote provider
    pub random_quote_url: String,

    /// `*` or a comma-separated list of allowed origins
    pub cors_allow_origins: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            random_quote_url: DEFAULT_RANDOM_QUOTE_URL.to_string(),
            cors_allow_origins: DEFAULT_CORS_ALLOW_ORIGINS.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::default().try_parsing(true))
    }

    fn from_environment(env: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("random_quote_url", DEFAULT_RANDOM_QUOTE_URL)?
            .set_default("cors_allow_origins", DEFAULT_CORS_ALLOW_ORIGINS)?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS as i64)?
            .add_source(env)
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingRequired("DATABASE_URL".to_string()));
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("REQUEST_TIMEOUT_MS".to_string()));
        }

        if !self.random_quote_url.starts_with("http://")
            && !self.random_quote_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue("RANDOM_QUOTE_URL".to_string()));
        }

        let bad_origin = self.cors_origins().iter().any(|origin| {
            !(origin.starts_with("http://") || origin.starts_with("https://"))
                || origin.contains(char::is_whitespace)
                || HeaderValue::from_str(origin).is_err()
        });
        if bad_origin {
            return Err(ConfigError::InvalidValue("CORS_ALLOW_ORIGINS".to_string()));
        }

        Ok(self)
    }

    /// Address the server binds to (all interfaces).
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Allowed CORS origins; an empty list means any origin.
    ///
    /// Every entry has passed validation, so each parses as a `HeaderValue`.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allow_origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty() && o != "*")
            .collect()
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_environment(
            config::Environment::default()
                .source(Some(map))
                .try_parsing(true),
        )
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = from_vars(&[]).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.database_url, "sqlite://quotes.db");
        assert_eq!(config.random_quote_url, "https://api.quotable.io/random");
        assert!(config.cors_origins().is_empty());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = from_vars(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite://./data/q.db"),
            ("CORS_ALLOW_ORIGINS", "http://localhost:5173, https://quotes.example"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.listen_addr().port(), 8080);
        assert_eq!(config.database_url, "sqlite://./data/q.db");
        assert_eq!(
            config.cors_origins(),
            vec!["http://localhost:5173", "https://quotes.example"]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(from_vars(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_unparsable_cors_origin_is_rejected() {
        for origins in ["localhost:5173", "http://ok.example, not an origin", "http://bad\u{7f}"] {
            assert!(
                matches!(
                    from_vars(&[("CORS_ALLOW_ORIGINS", origins)]),
                    Err(ConfigError::InvalidValue(ref name)) if name == "CORS_ALLOW_ORIGINS"
                ),
                "{origins:?} should be rejected"
            );
        }

        assert!(from_vars(&[("CORS_ALLOW_ORIGINS", "*")]).is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(matches!(
            from_vars(&[("REQUEST_TIMEOUT_MS", "0")]),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
