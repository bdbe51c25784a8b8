//! Notification audience value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who receives a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// The account owner behind the push token
    #[default]
    Individual,
    /// Every subscriber of the configured group topic
    Group,
}

impl Audience {
    /// Whether delivery needs a group topic
    #[must_use]
    pub const fn requires_topic(&self) -> bool {
        matches!(self, Self::Group)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Group => write!(f, "group"),
        }
    }
}
