//! Weather service port
//!
//! Defines the interface for weather data retrieval for the configured city.

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Live weather observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveWeather {
    /// District name as reported by the provider
    pub city: String,
    /// Condition label (e.g. `晴`)
    pub weather: String,
    /// Temperature in Celsius, verbatim from the provider
    pub temperature: String,
}

/// Forecast for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCast {
    /// Forecast date
    pub date: NaiveDate,
    /// Day of week, `1` = Monday
    pub week: String,
    /// Daytime condition label
    pub day_weather: String,
    /// Daytime (maximum) temperature in Celsius
    pub day_temp: String,
    /// Night (minimum) temperature in Celsius
    pub night_temp: String,
}

/// Multi-day forecast for one district
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// District name as reported by the provider
    pub city: String,
    /// Daily forecasts, usually today plus three days
    pub casts: Vec<DailyCast>,
}

impl ForecastReport {
    /// Forecast for a specific date
    #[must_use]
    pub fn cast_for(&self, date: NaiveDate) -> Option<&DailyCast> {
        self.casts.iter().find(|cast| cast.date == date)
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get live weather; `Ok(None)` when the provider returned no observation
    async fn live_weather(&self) -> Result<Option<LiveWeather>, ApplicationError>;

    /// Get the forecast; `Ok(None)` when the provider returned no forecast
    async fn forecast(&self) -> Result<Option<ForecastReport>, ApplicationError>;
}
