//! Recurring personal dates (birthdays, anniversaries)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::{CalendarKind, LunarDate, MonthDay};

/// A named date that recurs every year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringEvent {
    /// Display name, also checked for the importance marker
    pub name: String,
    /// Calendar the date is written in
    pub kind: CalendarKind,
    /// Month and day within that calendar
    pub date: MonthDay,
}

impl RecurringEvent {
    /// Create a new recurring event
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CalendarKind, date: MonthDay) -> Self {
        Self {
            name: name.into(),
            kind,
            date,
        }
    }

    /// Create an event from a `M月D日` label
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonthDay` if the label cannot be parsed.
    pub fn from_label(
        name: impl Into<String>,
        label: &str,
        kind: CalendarKind,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(name, kind, label.parse()?))
    }

    /// Solar date of this event for the given year
    ///
    /// Lunar events treat `year` as the lunar year, so the result can fall
    /// into the following solar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the month/day does not exist in that year.
    pub fn occurrence_in(&self, year: i32) -> Result<NaiveDate, DomainError> {
        let (month, day) = (self.date.month(), self.date.day());
        match self.kind {
            CalendarKind::Solar => NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| DomainError::invalid_solar(year, month, day)),
            CalendarKind::Lunar => LunarDate::new(year, month, day, false)?.to_solar(),
        }
    }

    /// Whether the name carries the importance marker
    #[must_use]
    pub fn is_important(&self, marker: &str) -> bool {
        !marker.is_empty() && self.name.contains(marker)
    }
}

impl fmt::Display for RecurringEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}{})", self.name, self.kind, self.date)
    }
}

/// A recurring event resolved against a reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedEvent {
    /// The source event
    pub event: RecurringEvent,
    /// Solar date of this year's occurrence
    pub occurrence: NaiveDate,
    /// Inclusive day count: 1 when the event is today, negative once passed
    pub days_until: i64,
}

impl EvaluatedEvent {
    /// Resolve an event against `today`
    ///
    /// Uses `today`'s year without rolling over to next year.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors from [`RecurringEvent::occurrence_in`].
    pub fn evaluate(event: &RecurringEvent, today: NaiveDate) -> Result<Self, DomainError> {
        let occurrence = event.occurrence_in(today.year())?;
        let days_until = (occurrence - today).num_days() + 1;
        Ok(Self {
            event: event.clone(),
            occurrence,
            days_until,
        })
    }

    /// One line of the reminder body
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}（阳历日期：{}，距离{}天）",
            self.event.name,
            self.event.date,
            self.occurrence.format("%Y-%m-%d"),
            self.days_until
        )
    }
}

/// The built-in list of dates, used when no events are configured
#[must_use]
pub fn default_events() -> Vec<RecurringEvent> {
    const DEFAULTS: [(&str, u32, u32, CalendarKind); 7] = [
        ("妈妈农历生日", 11, 10, CalendarKind::Lunar),
        ("爸爸农历生日", 1, 27, CalendarKind::Lunar),
        ("老婆阳历生日", 9, 29, CalendarKind::Solar),
        ("和老婆在一起的纪念日", 11, 14, CalendarKind::Solar),
        ("外婆农历生日", 7, 24, CalendarKind::Lunar),
        ("我的阳历生日", 10, 15, CalendarKind::Solar),
        ("我的农历生日", 8, 29, CalendarKind::Lunar),
    ];

    DEFAULTS
        .iter()
        .filter_map(|&(name, month, day, kind)| {
            MonthDay::new(month, day)
                .ok()
                .map(|date| RecurringEvent::new(name, kind, date))
        })
        .collect()
}
