//! TianAPI quote client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, QuoteEndpoint};

/// Quote client errors
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Connection to the quote service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the quote service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from quote service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Quote service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// TianAPI base URL (default: <https://apis.tianapi.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// TianAPI key
    #[serde(skip_serializing, default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://apis.tianapi.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for QuoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Quote client trait
#[async_trait]
pub trait QuoteClient: Send + Sync {
    /// Fetch one text from the given endpoint
    ///
    /// Returns `Ok(None)` when the response carries no `content`.
    async fn fetch(&self, endpoint: QuoteEndpoint) -> Result<Option<String>, QuoteError>;

    /// Fetch one text from an endpoint chosen uniformly at random
    async fn random_quote(&self) -> Result<Option<String>, QuoteError> {
        self.fetch(QuoteEndpoint::random()).await
    }
}

/// TianAPI HTTP client implementation
#[derive(Debug)]
pub struct TianQuoteClient {
    client: Client,
    config: QuoteConfig,
}

impl TianQuoteClient {
    /// Create a new TianAPI client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: QuoteConfig) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| QuoteError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url_for(&self, endpoint: QuoteEndpoint) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }
}

#[async_trait]
impl QuoteClient for TianQuoteClient {
    #[instrument(skip(self))]
    async fn fetch(&self, endpoint: QuoteEndpoint) -> Result<Option<String>, QuoteError> {
        let url = self.url_for(endpoint);
        debug!(url = %url, "Fetching quote");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| QuoteError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(QuoteError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(QuoteError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| QuoteError::ParseError(e.to_string()))?;

        let code = api_response.code;
        let msg = api_response.msg.clone();
        let content = api_response.into_content();
        if content.is_none() {
            warn!(code, msg = %msg, "Response carried no content");
        }

        Ok(content)
    }
}
