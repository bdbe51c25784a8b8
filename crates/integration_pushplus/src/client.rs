//! PushPlus HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::models::{PushMessage, SendPayload};

/// PushPlus client errors
#[derive(Debug, Error)]
pub enum PushPlusError {
    /// Connection to PushPlus failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be sent
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// PushPlus answered with a status other than 200
    #[error("Send rejected with HTTP {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// PushPlus configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PushPlusConfig {
    /// PushPlus base URL (default: <http://www.pushplus.plus>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Rendering template (default: `txt`)
    #[serde(default = "default_template")]
    pub template: String,

    /// Delivery channel (default: `mail`)
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Account token
    #[serde(skip_serializing, default)]
    pub token: String,
}

fn default_base_url() -> String {
    "http://www.pushplus.plus".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_template() -> String {
    "txt".to_string()
}

fn default_channel() -> String {
    "mail".to_string()
}

impl Default for PushPlusConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            template: default_template(),
            channel: default_channel(),
            token: String::new(),
        }
    }
}

impl std::fmt::Debug for PushPlusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushPlusConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("template", &self.template)
            .field("channel", &self.channel)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Message sender trait
#[async_trait]
pub trait PushPlusSender: Send + Sync {
    /// Deliver one message
    async fn send(&self, message: &PushMessage) -> Result<(), PushPlusError>;
}

/// PushPlus HTTP client implementation
#[derive(Debug)]
pub struct PushPlusClient {
    client: Client,
    config: PushPlusConfig,
}

impl PushPlusClient {
    /// Create a new PushPlus client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: PushPlusConfig) -> Result<Self, PushPlusError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PushPlusError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the JSON body for a message
    pub fn payload<'a>(&'a self, message: &'a PushMessage) -> SendPayload<'a> {
        SendPayload {
            token: &self.config.token,
            title: &message.title,
            content: &message.content,
            template: &self.config.template,
            channel: &self.config.channel,
            topic: message.topic.as_deref(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/send", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PushPlusSender for PushPlusClient {
    #[instrument(skip(self, message), fields(title = %message.title, group = message.topic.is_some()))]
    async fn send(&self, message: &PushMessage) -> Result<(), PushPlusError> {
        let url = self.endpoint();
        debug!(url = %url, "Sending PushPlus message");

        let response = self
            .client
            .post(&url)
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e| PushPlusError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            info!("Reminder sent");
            return Ok(());
        }

        error!(status = status.as_u16(), "Reminder send failed");
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PushPlusError::RateLimitExceeded);
        }
        Err(PushPlusError::Rejected {
            status: status.as_u16(),
        })
    }
}
