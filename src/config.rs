use std::time::Duration;

/// Connection settings for the relational backend, loaded from environment
/// variables.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend's REST facade, e.g. `https://db.example.com/rest/v1`.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Per-request timeout. The upstream service this layer was extracted
    /// from had none; a bound keeps a dead backend from hanging callers.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Load config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VETRINA_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            api_key: std::env::var("VETRINA_BACKEND_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("VETRINA_BACKEND_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }

    /// Config pointing at an explicit endpoint (tests, embedded use).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(5),
        }
    }
}
