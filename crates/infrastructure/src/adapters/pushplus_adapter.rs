//! Notification adapter - Implements NotificationPort using integration_pushplus

use application::{ApplicationError, NotificationPort};
use async_trait::async_trait;
use domain::{Audience, NotificationMessage};
use integration_pushplus::{
    PushMessage, PushPlusClient, PushPlusConfig, PushPlusError, PushPlusSender,
};
use tracing::instrument;

use crate::config::AppConfig;

/// Adapter for PushPlus mail delivery
#[derive(Debug)]
pub struct PushPlusNotificationAdapter {
    client: PushPlusClient,
    group_topic: Option<String>,
}

impl PushPlusNotificationAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(
        config: PushPlusConfig,
        group_topic: Option<String>,
    ) -> Result<Self, ApplicationError> {
        let client =
            PushPlusClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            group_topic: group_topic.filter(|topic| !topic.trim().is_empty()),
        })
    }

    /// Create from application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `PUSHPLUS_TOKEN` is missing.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let token = config.credential("PUSHPLUS_TOKEN")?;
        Self::with_config(
            config.pushplus.client_config(token),
            config.pushplus_group_topic.clone(),
        )
    }

    /// Resolve the audience into a PushPlus message
    fn to_push_message(&self, message: &NotificationMessage) -> Result<PushMessage, ApplicationError> {
        match message.audience {
            Audience::Individual => Ok(PushMessage::personal(&message.title, &message.body)),
            Audience::Group => {
                let topic = self.group_topic.as_deref().ok_or_else(|| {
                    ApplicationError::Configuration("PUSHPLUS_GROUP_TOPIC is not set".into())
                })?;
                Ok(PushMessage::to_topic(&message.title, &message.body, topic))
            },
        }
    }

    fn map_error(err: PushPlusError) -> ApplicationError {
        ApplicationError::Notify(err.to_string())
    }
}

#[async_trait]
impl NotificationPort for PushPlusNotificationAdapter {
    #[instrument(skip(self, message), fields(title = %message.title, audience = %message.audience))]
    async fn send(&self, message: &NotificationMessage) -> Result<(), ApplicationError> {
        let push = self.to_push_message(message)?;
        self.client.send(&push).await.map_err(Self::map_error)
    }
}
