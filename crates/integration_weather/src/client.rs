//! AMap weather client
//!
//! HTTP client for the AMap Weather API.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, CastData, CityForecast, DayCast, Extensions, LiveObservation};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API answered with `status != "1"`
    #[error("AMap error {infocode}: {info}")]
    ApiError {
        /// AMap info code, e.g. `10001`
        infocode: String,
        /// AMap info text, e.g. `INVALID_USER_KEY`
        info: String,
    },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// AMap API base URL (default: <https://restapi.amap.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Administrative district code (default: 450103, Qingxiu district)
    #[serde(default = "default_city")]
    pub city: String,

    /// AMap web service key
    #[serde(skip_serializing, default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://restapi.amap.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_city() -> String {
    "450103".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            city: default_city(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("city", &self.city)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the live observation for the configured district
    ///
    /// Returns `Ok(None)` when the API answers successfully but without data.
    async fn get_live(&self) -> Result<Option<LiveObservation>, WeatherError>;

    /// Get the forecast for the configured district
    ///
    /// Returns `Ok(None)` when the API answers successfully but without data.
    async fn get_forecast(&self) -> Result<Option<CityForecast>, WeatherError>;
}

/// AMap HTTP client implementation
#[derive(Debug)]
pub struct AmapClient {
    client: Client,
    config: WeatherConfig,
}

impl AmapClient {
    /// Create a new AMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Endpoint URL without query parameters
    fn endpoint(&self) -> String {
        format!(
            "{}/v3/weather/weatherInfo",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Perform one request and unwrap the AMap envelope
    async fn fetch(&self, extensions: Extensions) -> Result<ApiResponse, WeatherError> {
        let url = self.endpoint();
        debug!(url = %url, city = %self.config.city, extensions = extensions.as_str(), "Fetching weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("city", self.config.city.as_str()),
                ("key", self.config.api_key.as_str()),
                ("extensions", extensions.as_str()),
                ("output", "json"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        if api_response.status != "1" {
            warn!(infocode = %api_response.infocode, info = %api_response.info, "AMap rejected request");
            return Err(WeatherError::ApiError {
                infocode: api_response.infocode,
                info: api_response.info,
            });
        }

        Ok(api_response)
    }

    /// Parse one forecast entry
    fn parse_cast(cast: CastData) -> Result<DayCast, WeatherError> {
        let date = NaiveDate::parse_from_str(&cast.date, "%Y-%m-%d")
            .map_err(|e| WeatherError::ParseError(format!("Invalid date {}: {e}", cast.date)))?;

        Ok(DayCast {
            date,
            week: cast.week,
            day_weather: cast.dayweather,
            night_weather: cast.nightweather,
            day_temp: cast.daytemp,
            night_temp: cast.nighttemp,
            day_wind: cast.daywind,
            night_wind: cast.nightwind,
            day_power: cast.daypower,
            night_power: cast.nightpower,
        })
    }
}

#[async_trait]
impl WeatherClient for AmapClient {
    #[instrument(skip(self))]
    async fn get_live(&self) -> Result<Option<LiveObservation>, WeatherError> {
        let response = self.fetch(Extensions::Base).await?;
        Ok(response.lives.into_iter().next().map(LiveObservation::from))
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self) -> Result<Option<CityForecast>, WeatherError> {
        let response = self.fetch(Extensions::All).await?;
        let Some(forecast) = response.forecasts.into_iter().next() else {
            return Ok(None);
        };

        let casts = forecast
            .casts
            .into_iter()
            .map(Self::parse_cast)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(CityForecast {
            city: forecast.city,
            adcode: forecast.adcode,
            province: forecast.province,
            report_time: forecast.reporttime,
            casts,
        }))
    }
}
