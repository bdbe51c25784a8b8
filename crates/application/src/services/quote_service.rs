//! Daily quote
//!
//! Pulls random quotes until one passes the blocklist, then sends it.
//! The number of fetches is capped.

use std::sync::Arc;

use domain::NotificationMessage;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::outcome::JobOutcome;
use crate::ports::{NotificationPort, QuotePort};

/// Notification title for the daily quote
pub const QUOTE_TITLE: &str = "每日小情话";

/// Acceptance rules for fetched quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePolicy {
    /// Quotes containing any of these phrases are rejected
    pub blocklist: Vec<String>,
    /// Maximum number of fetches before giving up
    pub max_attempts: u32,
    /// Text prepended to the accepted quote
    pub greeting: String,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            blocklist: ["嫁你", "嫁给你", "像你", "娶我"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_attempts: 10,
            greeting: "致亲爱的老婆：".to_string(),
        }
    }
}

impl QuotePolicy {
    /// First blocklisted phrase found in `text`
    #[must_use]
    pub fn blocked_phrase(&self, text: &str) -> Option<&str> {
        self.blocklist
            .iter()
            .map(String::as_str)
            .find(|phrase| !phrase.is_empty() && text.contains(phrase))
    }

    /// Final message text for an accepted quote
    #[must_use]
    pub fn compose(&self, quote: &str) -> String {
        format!("{}{}", self.greeting, quote.trim())
    }
}

/// Sends one accepted quote per run
pub struct QuoteService {
    quotes: Arc<dyn QuotePort>,
    notifier: Arc<dyn NotificationPort>,
    policy: QuotePolicy,
}

impl std::fmt::Debug for QuoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl QuoteService {
    /// Create a new quote service
    #[must_use]
    pub fn new(
        quotes: Arc<dyn QuotePort>,
        notifier: Arc<dyn NotificationPort>,
        policy: QuotePolicy,
    ) -> Self {
        Self {
            quotes,
            notifier,
            policy,
        }
    }

    /// Fetch quotes until one is accepted, then send it
    ///
    /// A fetch error aborts the run. Running out of attempts is not an error.
    #[instrument(skip(self), fields(max_attempts = self.policy.max_attempts))]
    pub async fn run(&self) -> Result<JobOutcome, ApplicationError> {
        let Some(text) = self.select_quote().await? else {
            warn!(
                attempts = self.policy.max_attempts,
                "No acceptable quote, giving up"
            );
            return Ok(JobOutcome::nothing("no acceptable quote"));
        };

        info!(quote = %text, "Selected quote");
        let message = NotificationMessage::individual(QUOTE_TITLE, text);
        self.notifier.send(&message).await?;

        Ok(JobOutcome::Sent {
            title: message.title,
        })
    }

    async fn select_quote(&self) -> Result<Option<String>, ApplicationError> {
        for attempt in 1..=self.policy.max_attempts {
            let Some(quote) = self.quotes.random_quote().await? else {
                warn!(attempt, "Quote response had no content");
                continue;
            };

            let text = self.policy.compose(&quote);
            if let Some(phrase) = self.policy.blocked_phrase(&text) {
                info!(attempt, phrase, "Rejected quote");
                continue;
            }

            return Ok(Some(text));
        }
        Ok(None)
    }
}
