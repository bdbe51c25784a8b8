//! Holiday adapter - Implements HolidayPort using integration_calendar

use application::{ApplicationError, CalendarDay, HolidayPort};
use async_trait::async_trait;
use chrono::NaiveDate;
use integration_calendar::{
    CalendarClient, CalendarConfig, CalendarDay as JuheDay, CalendarError, JuheCalendarClient,
};
use tracing::{debug, instrument};

use crate::config::AppConfig;

/// Adapter for holiday lookups using the Juhe calendar API
#[derive(Debug)]
pub struct JuheHolidayAdapter {
    client: JuheCalendarClient,
}

impl JuheHolidayAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: CalendarConfig) -> Result<Self, ApplicationError> {
        let client = JuheCalendarClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create from application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `CALENDARAPI_KEY` is missing.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let key = config.credential("CALENDARAPI_KEY")?;
        Self::with_config(config.calendar.client_config(key))
    }

    /// Map integration calendar error to application error
    fn map_error(err: CalendarError) -> ApplicationError {
        match err {
            CalendarError::ApiError { code, reason } => {
                ApplicationError::Fetch(format!("calendar API error {code}: {reason}"))
            },
            CalendarError::MissingData => {
                ApplicationError::Fetch("calendar response contained no data".into())
            },
            other => ApplicationError::Fetch(format!("calendar: {other}")),
        }
    }

    fn convert(day: JuheDay) -> CalendarDay {
        CalendarDay {
            date: day.date,
            holiday: day.holiday,
        }
    }
}

#[async_trait]
impl HolidayPort for JuheHolidayAdapter {
    #[instrument(skip(self))]
    async fn calendar_day(&self, date: NaiveDate) -> Result<CalendarDay, ApplicationError> {
        let day = self.client.get_day(date).await.map_err(Self::map_error)?;
        debug!(date = %day.date, holiday = ?day.holiday, "Calendar day fetched");
        Ok(Self::convert(day))
    }
}
