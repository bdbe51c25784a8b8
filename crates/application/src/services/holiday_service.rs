//! Holiday reminder
//!
//! Looks up tomorrow in the holiday calendar and sends a heads-up when
//! tomorrow is a holiday.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use domain::NotificationMessage;
use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::outcome::JobOutcome;
use crate::ports::{HolidayPort, NotificationPort};

/// Notification title for holidays
pub const HOLIDAY_TITLE: &str = "节日提醒";

/// Sends a reminder the day before a public holiday
pub struct HolidayService {
    calendar: Arc<dyn HolidayPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl std::fmt::Debug for HolidayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayService").finish_non_exhaustive()
    }
}

impl HolidayService {
    /// Create a new holiday service
    #[must_use]
    pub fn new(calendar: Arc<dyn HolidayPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { calendar, notifier }
    }

    /// Check tomorrow relative to `today` and notify if it is a holiday
    #[instrument(skip(self))]
    pub async fn run(&self, today: NaiveDate) -> Result<JobOutcome, ApplicationError> {
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| ApplicationError::Internal(format!("no day after {today}")))?;

        let day = self.calendar.calendar_day(tomorrow).await?;
        info!(date = %day.date, holiday = ?day.holiday, "Fetched calendar info");

        let Some(holiday) = day.holiday_name() else {
            info!("No holiday tomorrow");
            return Ok(JobOutcome::nothing("no holiday tomorrow"));
        };

        let message =
            NotificationMessage::individual(HOLIDAY_TITLE, format!("{}：{holiday}", day.date));
        self.notifier.send(&message).await?;

        info!(holiday, "Sent holiday reminder");
        Ok(JobOutcome::Sent {
            title: message.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use domain::Audience;
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{CalendarDay, MockHolidayPort, MockNotificationPort};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_returning(holiday: Option<&str>) -> MockHolidayPort {
        let holiday = holiday.map(ToString::to_string);
        let mut calendar = MockHolidayPort::new();
        calendar
            .expect_calendar_day()
            .with(eq(date(2024, 10, 1)))
            .times(1)
            .returning(move |_| {
                Ok(CalendarDay {
                    date: "2024-10-1".to_string(),
                    holiday: holiday.clone(),
                })
            });
        calendar
    }

    #[tokio::test]
    async fn holiday_sends_one_notification() {
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_send()
            .times(1)
            .withf(|msg| {
                msg.title == "节日提醒"
                    && msg.body.contains("2024-10-1")
                    && msg.body.contains("国庆节")
                    && msg.audience == Audience::Individual
            })
            .returning(|_| Ok(()));

        let service =
            HolidayService::new(Arc::new(calendar_returning(Some("国庆节"))), Arc::new(notifier));
        let outcome = service.run(date(2024, 9, 30)).await.unwrap();

        assert_eq!(
            outcome,
            JobOutcome::Sent {
                title: "节日提醒".to_string()
            }
        );
    }

    #[tokio::test]
    async fn body_joins_date_and_holiday() {
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_send()
            .withf(|msg| msg.body == "2024-10-1：国庆节")
            .returning(|_| Ok(()));

        let service =
            HolidayService::new(Arc::new(calendar_returning(Some("国庆节"))), Arc::new(notifier));
        assert!(service.run(date(2024, 9, 30)).await.is_ok());
    }

    #[tokio::test]
    async fn empty_holiday_sends_nothing() {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_send().never();

        let service = HolidayService::new(Arc::new(calendar_returning(Some(""))), Arc::new(notifier));
        let outcome = service.run(date(2024, 9, 30)).await.unwrap();
        assert!(!outcome.was_sent());
    }

    #[tokio::test]
    async fn missing_holiday_sends_nothing() {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_send().never();

        let service = HolidayService::new(Arc::new(calendar_returning(None)), Arc::new(notifier));
        let outcome = service.run(date(2024, 9, 30)).await.unwrap();
        assert!(!outcome.was_sent());
    }

    #[tokio::test]
    async fn fetch_error_is_propagated_without_notifying() {
        let mut calendar = MockHolidayPort::new();
        calendar
            .expect_calendar_day()
            .returning(|_| Err(ApplicationError::Fetch("HTTP 503".to_string())));
        let mut notifier = MockNotificationPort::new();
        notifier.expect_send().never();

        let service = HolidayService::new(Arc::new(calendar), Arc::new(notifier));
        let result = service.run(date(2024, 9, 30)).await;
        assert!(matches!(result, Err(ApplicationError::Fetch(_))));
    }
}
