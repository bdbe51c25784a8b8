//! Notification port
//!
//! Defines the interface for delivering a finished message.

use async_trait::async_trait;
use domain::NotificationMessage;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for push notification delivery
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Deliver a message to its audience
    ///
    /// Returns `ApplicationError::Notify` if the provider rejects it.
    async fn send(&self, message: &NotificationMessage) -> Result<(), ApplicationError>;
}
