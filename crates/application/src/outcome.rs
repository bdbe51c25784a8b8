//! Result of a single job run

use std::fmt;

/// What a job did when it completed without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// A notification was accepted by the push provider
    Sent {
        /// Title of the delivered message
        title: String,
    },
    /// Nothing qualified for a notification
    NothingToSend {
        /// Why the job stayed silent
        reason: String,
    },
}

impl JobOutcome {
    /// Create a `NothingToSend` outcome
    pub fn nothing(reason: impl Into<String>) -> Self {
        Self::NothingToSend {
            reason: reason.into(),
        }
    }

    /// Whether a notification went out
    pub const fn was_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent { title } => write!(f, "sent \"{title}\""),
            Self::NothingToSend { reason } => write!(f, "nothing to send ({reason})"),
        }
    }
}
