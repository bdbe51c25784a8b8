//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Missing or invalid configuration, raised before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream API call failed or returned an unusable response
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Push provider did not accept the notification
    #[error("Notification failed: {0}")]
    Notify(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error was raised by configuration validation
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
