//! Quote adapter - Implements QuotePort using integration_quotes

use application::{ApplicationError, QuotePort};
use async_trait::async_trait;
use integration_quotes::{QuoteClient, QuoteConfig, QuoteError, TianQuoteClient};
use tracing::instrument;

use crate::config::AppConfig;

/// Adapter for random quotes using TianAPI
#[derive(Debug)]
pub struct TianQuoteAdapter {
    client: TianQuoteClient,
}

impl TianQuoteAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: QuoteConfig) -> Result<Self, ApplicationError> {
        let client =
            TianQuoteClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create from application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `TIAN_KEY` is missing.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let key = config.credential("TIAN_KEY")?;
        Self::with_config(config.quotes.client_config(key))
    }

    fn map_error(err: QuoteError) -> ApplicationError {
        ApplicationError::Fetch(format!("quote: {err}"))
    }
}

#[async_trait]
impl QuotePort for TianQuoteAdapter {
    #[instrument(skip(self))]
    async fn random_quote(&self) -> Result<Option<String>, ApplicationError> {
        self.client.random_quote().await.map_err(Self::map_error)
    }
}
