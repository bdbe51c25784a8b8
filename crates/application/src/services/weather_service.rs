//! Weather report
//!
//! Combines the live observation, tomorrow's forecast and a canned advice
//! sentence into one group notification.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use domain::{NotificationMessage, advice_for};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::outcome::JobOutcome;
use crate::ports::{ForecastReport, LiveWeather, NotificationPort, WeatherPort};

/// Notification title for the weather report
pub const WEATHER_TITLE: &str = "天气提醒";

/// Condition used when tomorrow is missing from the forecast
pub const UNKNOWN_CONDITION: &str = "未知天气状况";

/// Presentation settings for the weather report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReportConfig {
    /// Prefix put before the district name, e.g. `南宁市`
    pub city_prefix: String,
}

impl Default for WeatherReportConfig {
    fn default() -> Self {
        Self {
            city_prefix: "南宁市".to_string(),
        }
    }
}

impl WeatherReportConfig {
    /// Live weather section
    #[must_use]
    pub fn format_live(&self, live: &LiveWeather) -> String {
        format!(
            "{}{}-实时天气信息:\n天气状况: {}\n温度: {}°C\n",
            self.city_prefix, live.city, live.weather, live.temperature
        )
    }

    /// Forecast section for `tomorrow`, plus the condition to advise on
    #[must_use]
    pub fn format_forecast(&self, report: &ForecastReport, tomorrow: NaiveDate) -> (String, String) {
        let mut text = format!("{}{}-预报天气信息:\n", self.city_prefix, report.city);

        match report.cast_for(tomorrow) {
            Some(cast) => {
                text.push_str(&format!(
                    "日期: {}(周{})\n白天天气状况: {}\n温度: {}°C-{}°C\n",
                    cast.date.format("%Y-%m-%d"),
                    cast.week,
                    cast.day_weather,
                    cast.night_temp,
                    cast.day_temp
                ));
                (text, cast.day_weather.clone())
            },
            None => {
                text.push_str("未找到明天的天气信息。");
                (text, UNKNOWN_CONDITION.to_string())
            },
        }
    }
}

/// Sends the daily weather report to the group
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    notifier: Arc<dyn NotificationPort>,
    config: WeatherReportConfig,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        notifier: Arc<dyn NotificationPort>,
        config: WeatherReportConfig,
    ) -> Self {
        Self {
            weather,
            notifier,
            config,
        }
    }

    /// Build the report for tomorrow relative to `today` and send it
    #[instrument(skip(self))]
    pub async fn run(&self, today: NaiveDate) -> Result<JobOutcome, ApplicationError> {
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| ApplicationError::Internal(format!("no day after {today}")))?;

        let Some(live) = self.weather.live_weather().await? else {
            info!("No live weather returned");
            return Ok(JobOutcome::nothing("no live weather data"));
        };
        let live_text = self.config.format_live(&live);
        debug!(live = %live_text, "Live weather");

        let Some(forecast) = self.weather.forecast().await? else {
            info!("No forecast returned");
            return Ok(JobOutcome::nothing("no forecast data"));
        };
        let (forecast_text, condition) = self.config.format_forecast(&forecast, tomorrow);
        debug!(forecast = %forecast_text, condition = %condition, "Forecast");

        let advice = advice_for(&condition);
        info!(condition = %condition, advice, "Weather advice");

        let message =
            NotificationMessage::group(WEATHER_TITLE, format!("{live_text}{forecast_text}{advice}"));
        self.notifier.send(&message).await?;

        Ok(JobOutcome::Sent {
            title: message.title,
        })
    }
}
