//! PushPlus request models

use serde::Serialize;

/// Message to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    /// Mail subject
    pub title: String,
    /// Plain-text body
    pub content: String,
    /// Group topic; `None` sends to the token owner only
    pub topic: Option<String>,
}

impl PushMessage {
    /// Message for the token owner
    #[must_use]
    pub fn personal(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            topic: None,
        }
    }

    /// Message for every subscriber of a topic
    #[must_use]
    pub fn to_topic(
        title: impl Into<String>,
        content: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            topic: Some(topic.into()),
        }
    }
}

/// JSON body of a `send` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendPayload<'a> {
    /// Account token
    pub token: &'a str,
    /// Mail subject
    pub title: &'a str,
    /// Message body
    pub content: &'a str,
    /// Rendering template
    pub template: &'a str,
    /// Delivery channel
    pub channel: &'a str,
    /// Group topic, omitted for personal messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<&'a str>,
}
