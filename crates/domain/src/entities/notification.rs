//! Notification message entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Audience;

/// A message ready to be handed to the push provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Subject line
    pub title: String,
    /// Plain-text body
    pub body: String,
    /// Who receives it
    pub audience: Audience,
}

impl NotificationMessage {
    /// Create a message for the default recipient
    #[must_use]
    pub fn individual(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            audience: Audience::Individual,
        }
    }

    /// Create a message for the group topic
    #[must_use]
    pub fn group(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            audience: Audience::Group,
        }
    }
}
