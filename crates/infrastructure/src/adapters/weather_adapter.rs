//! Weather adapter - Implements WeatherPort using integration_weather

use application::{ApplicationError, DailyCast, ForecastReport, LiveWeather, WeatherPort};
use async_trait::async_trait;
use integration_weather::{
    AmapClient, CityForecast, DayCast, LiveObservation, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

use crate::config::AppConfig;

/// Adapter for weather services using the AMap API
#[derive(Debug)]
pub struct AmapWeatherAdapter {
    client: AmapClient,
}

impl AmapWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            AmapClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create from application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `AMAP_KEY` is missing.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let key = config.credential("AMAP_KEY")?;
        Self::with_config(config.weather.client_config(key))
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ApiError { infocode, info } => {
                ApplicationError::Fetch(format!("weather API error {infocode}: {info}"))
            },
            other => ApplicationError::Fetch(format!("weather: {other}")),
        }
    }

    fn convert_live(live: LiveObservation) -> LiveWeather {
        LiveWeather {
            city: live.city,
            weather: live.weather,
            temperature: live.temperature,
        }
    }

    fn convert_cast(cast: DayCast) -> DailyCast {
        DailyCast {
            date: cast.date,
            week: cast.week,
            day_weather: cast.day_weather,
            day_temp: cast.day_temp,
            night_temp: cast.night_temp,
        }
    }

    fn convert_forecast(forecast: CityForecast) -> ForecastReport {
        ForecastReport {
            city: forecast.city,
            casts: forecast
                .casts
                .into_iter()
                .map(Self::convert_cast)
                .collect(),
        }
    }
}

#[async_trait]
impl WeatherPort for AmapWeatherAdapter {
    #[instrument(skip(self))]
    async fn live_weather(&self) -> Result<Option<LiveWeather>, ApplicationError> {
        let live = self.client.get_live().await.map_err(Self::map_error)?;
        debug!(found = live.is_some(), "Live weather fetched");
        Ok(live.map(Self::convert_live))
    }

    #[instrument(skip(self))]
    async fn forecast(&self) -> Result<Option<ForecastReport>, ApplicationError> {
        let forecast = self.client.get_forecast().await.map_err(Self::map_error)?;
        debug!(found = forecast.is_some(), "Forecast fetched");
        Ok(forecast.map(Self::convert_forecast))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn map_error_api_error() {
        let app_err = AmapWeatherAdapter::map_error(WeatherError::ApiError {
            infocode: "10001".to_string(),
            info: "INVALID_USER_KEY".to_string(),
        });
        assert!(
            matches!(app_err, ApplicationError::Fetch(ref m) if m.contains("10001") && m.contains("INVALID_USER_KEY"))
        );
    }

    #[test]
    fn map_error_rate_limited() {
        let app_err = AmapWeatherAdapter::map_error(WeatherError::RateLimitExceeded);
        assert!(matches!(app_err, ApplicationError::Fetch(_)));
    }

    #[test]
    fn convert_forecast_keeps_order() {
        let cast = |day: u32, weather: &str| DayCast {
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            week: "1".to_string(),
            day_weather: weather.to_string(),
            night_weather: String::new(),
            day_temp: "30".to_string(),
            night_temp: "22".to_string(),
            day_wind: String::new(),
            night_wind: String::new(),
            day_power: String::new(),
            night_power: String::new(),
        };
        let forecast = CityForecast {
            city: "青秀区".to_string(),
            adcode: "450103".to_string(),
            province: "广西".to_string(),
            report_time: String::new(),
            casts: vec![cast(2, "晴"), cast(3, "小雨")],
        };

        let report = AmapWeatherAdapter::convert_forecast(forecast);
        assert_eq!(report.city, "青秀区");
        assert_eq!(report.casts.len(), 2);
        assert_eq!(report.casts[1].day_weather, "小雨");
    }

    #[test]
    fn from_app_config_requires_key() {
        let err = AmapWeatherAdapter::from_app_config(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("AMAP_KEY"));
    }
}
