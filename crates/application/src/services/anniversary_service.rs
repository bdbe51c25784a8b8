//! Anniversary reminders
//!
//! Resolves the configured recurring dates against today, picks the ones
//! coming up soon (or marked important) and sends a single summary.

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{DomainError, EvaluatedEvent, NotificationMessage, RecurringEvent, today_lunar};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::outcome::JobOutcome;
use crate::ports::NotificationPort;

/// Notification title for upcoming dates
pub const ANNIVERSARY_TITLE: &str = "重要日期提醒";

const BODY_HEADER: &str = "未来有以下日子需要注意：";

/// Which evaluated events deserve a reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnniversaryPolicy {
    /// Largest `days_until` still reminded about
    pub horizon_days: i64,
    /// Events whose name contains this are always reminded about
    pub important_marker: String,
}

impl Default for AnniversaryPolicy {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            important_marker: "重要".to_string(),
        }
    }
}

impl AnniversaryPolicy {
    /// `0 <= days_until <= horizon`, or the name carries the marker
    #[must_use]
    pub fn qualifies(&self, evaluated: &EvaluatedEvent) -> bool {
        (0..=self.horizon_days).contains(&evaluated.days_until)
            || evaluated.event.is_important(&self.important_marker)
    }
}

/// An event that could not be resolved to a solar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFailure {
    /// The offending event
    pub event: RecurringEvent,
    /// Why conversion failed
    pub error: DomainError,
}

/// Outcome of resolving every event, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnniversaryReport {
    /// Successfully resolved events
    pub evaluated: Vec<EvaluatedEvent>,
    /// Events that failed, evaluation continued past them
    pub failures: Vec<EventFailure>,
}

impl AnniversaryReport {
    /// Events that qualify under `policy`, in input order
    #[must_use]
    pub fn due<'a>(&'a self, policy: &AnniversaryPolicy) -> Vec<&'a EvaluatedEvent> {
        self.evaluated
            .iter()
            .filter(|evaluated| policy.qualifies(evaluated))
            .collect()
    }
}

/// Resolve every event against `today`
///
/// A failing event is recorded in the report and does not stop the others.
#[must_use]
pub fn evaluate_events(today: NaiveDate, events: &[RecurringEvent]) -> AnniversaryReport {
    let mut report = AnniversaryReport::default();

    for event in events {
        match EvaluatedEvent::evaluate(event, today) {
            Ok(evaluated) => {
                debug!(
                    name = %event.name,
                    occurrence = %evaluated.occurrence,
                    days_until = evaluated.days_until,
                    "Evaluated event"
                );
                report.evaluated.push(evaluated);
            },
            Err(error) => {
                warn!(name = %event.name, date = %event.date, error = %error, "Skipping event");
                report.failures.push(EventFailure {
                    event: event.clone(),
                    error,
                });
            },
        }
    }

    report
}

/// Build the reminder body, `None` if nothing is due
#[must_use]
pub fn format_reminder(due: &[&EvaluatedEvent]) -> Option<NotificationMessage> {
    if due.is_empty() {
        return None;
    }

    let lines: Vec<String> = due.iter().map(|evaluated| evaluated.summary_line()).collect();
    let body = format!("{BODY_HEADER}{}", lines.join("\n"));
    Some(NotificationMessage::individual(ANNIVERSARY_TITLE, body))
}

/// Sends the upcoming-dates reminder
pub struct AnniversaryService {
    notifier: Arc<dyn NotificationPort>,
    events: Vec<RecurringEvent>,
    policy: AnniversaryPolicy,
}

impl std::fmt::Debug for AnniversaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnniversaryService")
            .field("events", &self.events.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl AnniversaryService {
    /// Create a new anniversary service
    #[must_use]
    pub fn new(
        notifier: Arc<dyn NotificationPort>,
        events: Vec<RecurringEvent>,
        policy: AnniversaryPolicy,
    ) -> Self {
        Self {
            notifier,
            events,
            policy,
        }
    }

    /// Evaluate all events for `today` and notify about the due ones
    #[instrument(skip(self), fields(events = self.events.len()))]
    pub async fn run(&self, today: NaiveDate) -> Result<JobOutcome, ApplicationError> {
        match today_lunar(today) {
            Ok(lunar) => info!(today = %today, lunar = %lunar, "Checking dates"),
            Err(e) => warn!(today = %today, error = %e, "Could not convert today to lunar"),
        }

        let report = evaluate_events(today, &self.events);
        if !report.failures.is_empty() {
            warn!(failed = report.failures.len(), "Some events could not be evaluated");
        }

        let due = report.due(&self.policy);
        for evaluated in &due {
            info!(
                name = %evaluated.event.name,
                days_until = evaluated.days_until,
                "Event due soon"
            );
        }

        let Some(message) = format_reminder(&due) else {
            info!(horizon = self.policy.horizon_days, "No events within the horizon");
            return Ok(JobOutcome::nothing("no upcoming dates"));
        };

        self.notifier.send(&message).await?;
        info!(count = due.len(), "Sent anniversary reminder");
        Ok(JobOutcome::Sent {
            title: message.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use domain::{Audience, CalendarKind};

    use super::*;
    use crate::ports::MockNotificationPort;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn solar(name: &str, label: &str) -> RecurringEvent {
        RecurringEvent::from_label(name, label, CalendarKind::Solar).unwrap()
    }

    fn lunar(name: &str, label: &str) -> RecurringEvent {
        RecurringEvent::from_label(name, label, CalendarKind::Lunar).unwrap()
    }

    #[test]
    fn event_today_is_due() {
        let report = evaluate_events(date(2025, 9, 29), &[solar("Test", "9月29日")]);
        assert_eq!(report.evaluated[0].days_until, 1);

        let due = report.due(&AnniversaryPolicy::default());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].event.name, "Test");
    }

    #[test]
    fn horizon_boundary() {
        let today = date(2025, 9, 22);
        let report = evaluate_events(today, &[solar("seven", "9月28日"), solar("eight", "9月29日")]);
        let due = report.due(&AnniversaryPolicy::default());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].event.name, "seven");
        assert_eq!(due[0].days_until, 7);
    }

    #[test]
    fn yesterday_counts_as_zero_and_qualifies() {
        let report = evaluate_events(date(2025, 9, 30), &[solar("Test", "9月29日")]);
        assert_eq!(report.evaluated[0].days_until, 0);
        assert_eq!(report.due(&AnniversaryPolicy::default()).len(), 1);
    }

    #[test]
    fn important_events_always_due() {
        let report = evaluate_events(date(2025, 3, 1), &[solar("重要的日子", "12月1日")]);
        assert!(report.evaluated[0].days_until > 7);
        assert_eq!(report.due(&AnniversaryPolicy::default()).len(), 1);
    }

    #[test]
    fn failures_do_not_abort_evaluation() {
        let events = [
            solar("first", "9月29日"),
            solar("broken", "2月30日"),
            lunar("short month", "12月30日"),
            solar("last", "9月30日"),
        ];
        let report = evaluate_events(date(2024, 9, 28), &events);

        let names: Vec<&str> = report.evaluated.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, ["first", "last"]);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].event.name, "broken");
        assert_eq!(report.failures[1].event.name, "short month");
    }

    #[test]
    fn custom_policy() {
        let policy = AnniversaryPolicy {
            horizon_days: 30,
            important_marker: "!".to_string(),
        };
        let report = evaluate_events(date(2025, 9, 1), &[solar("Test", "9月29日")]);
        assert!(policy.qualifies(&report.evaluated[0]));
        assert!(!AnniversaryPolicy::default().qualifies(&report.evaluated[0]));
    }

    #[test]
    fn format_reminder_body() {
        let report = evaluate_events(
            date(2025, 9, 25),
            &[solar("老婆阳历生日", "9月29日"), solar("纪念日", "9月30日")],
        );
        let due = report.due(&AnniversaryPolicy::default());
        let message = format_reminder(&due).unwrap();

        assert_eq!(message.title, "重要日期提醒");
        assert_eq!(message.audience, Audience::Individual);
        assert_eq!(
            message.body,
            "未来有以下日子需要注意：老婆阳历生日: 9月29日（阳历日期：2025-09-29，距离5天）\n\
             纪念日: 9月30日（阳历日期：2025-09-30，距离6天）"
        );
    }

    #[test]
    fn format_reminder_empty() {
        assert!(format_reminder(&[]).is_none());
    }

    #[tokio::test]
    async fn run_sends_one_reminder() {
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_send()
            .times(1)
            .withf(|msg| msg.title == "重要日期提醒" && msg.body.contains("Test: 9月29日"))
            .returning(|_| Ok(()));

        let service = AnniversaryService::new(
            Arc::new(notifier),
            vec![solar("Test", "9月29日"), solar("later", "12月1日")],
            AnniversaryPolicy::default(),
        );

        let outcome = service.run(date(2025, 9, 29)).await.unwrap();
        assert!(outcome.was_sent());
    }

    #[tokio::test]
    async fn run_without_due_events_sends_nothing() {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_send().never();

        let service = AnniversaryService::new(
            Arc::new(notifier),
            vec![solar("later", "12月1日")],
            AnniversaryPolicy::default(),
        );

        let outcome = service.run(date(2025, 9, 29)).await.unwrap();
        assert!(!outcome.was_sent());
    }

    #[tokio::test]
    async fn run_propagates_notify_error() {
        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_send()
            .returning(|_| Err(ApplicationError::Notify("HTTP 500".to_string())));

        let service = AnniversaryService::new(
            Arc::new(notifier),
            vec![solar("Test", "9月29日")],
            AnniversaryPolicy::default(),
        );

        let result = service.run(date(2025, 9, 29)).await;
        assert!(matches!(result, Err(ApplicationError::Notify(_))));
    }
}
