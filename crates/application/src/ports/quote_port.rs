//! Quote service port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching short romantic quotes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuotePort: Send + Sync {
    /// Fetch one random quote
    ///
    /// `Ok(None)` means the service answered but the payload had no content.
    async fn random_quote(&self) -> Result<Option<String>, ApplicationError>;
}
