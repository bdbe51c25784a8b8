//! Weather data models
//!
//! Wire types for the AMap weather API and the parsed values handed out by
//! the client. AMap returns every number as a string; values are kept
//! verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which data set to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extensions {
    /// Live observation (`extensions=base`)
    Base,
    /// Forecast (`extensions=all`)
    All,
}

impl Extensions {
    /// Query parameter value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::All => "all",
        }
    }
}

/// Live weather observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveObservation {
    /// Province name
    pub province: String,
    /// District or city name
    pub city: String,
    /// Administrative area code
    pub adcode: String,
    /// Condition label, e.g. `多云`
    pub weather: String,
    /// Temperature in Celsius
    pub temperature: String,
    /// Wind direction label
    pub wind_direction: String,
    /// Wind force, e.g. `≤3`
    pub wind_power: String,
    /// Relative humidity percentage
    pub humidity: String,
    /// Observation time as reported, `YYYY-MM-DD HH:MM:SS`
    pub report_time: String,
}

/// Forecast for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCast {
    /// Forecast date
    pub date: NaiveDate,
    /// Day of week, `1` = Monday
    pub week: String,
    /// Daytime condition label
    pub day_weather: String,
    /// Night condition label
    pub night_weather: String,
    /// Daytime temperature in Celsius
    pub day_temp: String,
    /// Night temperature in Celsius
    pub night_temp: String,
    /// Daytime wind direction
    pub day_wind: String,
    /// Night wind direction
    pub night_wind: String,
    /// Daytime wind force
    pub day_power: String,
    /// Night wind force
    pub night_power: String,
}

/// Forecast for one district
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityForecast {
    /// District or city name
    pub city: String,
    /// Administrative area code
    pub adcode: String,
    /// Province name
    pub province: String,
    /// Forecast publication time
    pub report_time: String,
    /// One entry per day, starting today
    pub casts: Vec<DayCast>,
}

/// Raw API response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    /// `"1"` on success, `"0"` on failure
    pub status: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub infocode: String,
    #[serde(default)]
    pub lives: Vec<LiveData>,
    #[serde(default)]
    pub forecasts: Vec<ForecastData>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LiveData {
    #[serde(default)]
    pub province: String,
    pub city: String,
    #[serde(default)]
    pub adcode: String,
    pub weather: String,
    pub temperature: String,
    #[serde(default)]
    pub winddirection: String,
    #[serde(default)]
    pub windpower: String,
    #[serde(default)]
    pub humidity: String,
    #[serde(default)]
    pub reporttime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastData {
    pub city: String,
    #[serde(default)]
    pub adcode: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub reporttime: String,
    #[serde(default)]
    pub casts: Vec<CastData>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CastData {
    pub date: String,
    pub week: String,
    pub dayweather: String,
    #[serde(default)]
    pub nightweather: String,
    pub daytemp: String,
    pub nighttemp: String,
    #[serde(default)]
    pub daywind: String,
    #[serde(default)]
    pub nightwind: String,
    #[serde(default)]
    pub daypower: String,
    #[serde(default)]
    pub nightpower: String,
}

impl From<LiveData> for LiveObservation {
    fn from(data: LiveData) -> Self {
        Self {
            province: data.province,
            city: data.city,
            adcode: data.adcode,
            weather: data.weather,
            temperature: data.temperature,
            wind_direction: data.winddirection,
            wind_power: data.windpower,
            humidity: data.humidity,
            report_time: data.reporttime,
        }
    }
}
