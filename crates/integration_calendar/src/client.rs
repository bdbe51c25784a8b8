//! Juhe calendar client
//!
//! HTTP client for the Juhe calendar `day` endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, CalendarDay, format_query_date};

/// Calendar client errors
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Connection to the calendar service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the calendar service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from calendar service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API answered with a non-zero `error_code`
    #[error("Juhe error {code}: {reason}")]
    ApiError {
        /// Juhe error code
        code: i64,
        /// Juhe reason text
        reason: String,
    },

    /// The response carried no day record
    #[error("Response contained no calendar data")]
    MissingData,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Calendar service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Juhe API base URL (default: <http://v.juhe.cn>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Juhe application key
    #[serde(skip_serializing, default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "http://v.juhe.cn".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Calendar client trait
#[async_trait]
pub trait CalendarClient: Send + Sync {
    /// Look up a single day
    async fn get_day(&self, date: NaiveDate) -> Result<CalendarDay, CalendarError>;
}

/// Juhe HTTP client implementation
#[derive(Debug)]
pub struct JuheCalendarClient {
    client: Client,
    config: CalendarConfig,
}

impl JuheCalendarClient {
    /// Create a new Juhe client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CalendarError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/calendar/day", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CalendarClient for JuheCalendarClient {
    #[instrument(skip(self), fields(date = %date))]
    async fn get_day(&self, date: NaiveDate) -> Result<CalendarDay, CalendarError> {
        let url = self.endpoint();
        let query_date = format_query_date(date);
        debug!(url = %url, date = %query_date, "Fetching calendar day");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("date", query_date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CalendarError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CalendarError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(CalendarError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(CalendarError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| CalendarError::ParseError(e.to_string()))?;

        if api_response.error_code != 0 {
            warn!(code = api_response.error_code, reason = %api_response.reason, "Juhe rejected request");
            return Err(CalendarError::ApiError {
                code: api_response.error_code,
                reason: api_response.reason,
            });
        }

        api_response
            .result
            .and_then(|result| result.data)
            .ok_or(CalendarError::MissingData)
    }
}
