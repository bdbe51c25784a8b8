//! Job sections: the recurring event list and the anniversary policy.

use application::AnniversaryPolicy;
use domain::{CalendarKind, DomainError, RecurringEvent, default_events};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One `[[events]]` entry
///
/// ```toml
/// [[events]]
/// name = "妈妈农历生日"
/// date = "11月10日"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    /// Display name
    pub name: String,

    /// `M月D日` label
    pub date: String,

    /// Calendar; inferred from the name when omitted
    #[serde(default)]
    pub kind: Option<CalendarKind>,
}

impl EventEntry {
    /// Calendar this entry is written in
    #[must_use]
    pub fn effective_kind(&self) -> CalendarKind {
        self.kind
            .unwrap_or_else(|| CalendarKind::infer_from_name(&self.name))
    }

    /// Parse into a domain event
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonthDay` if the date cannot be parsed.
    pub fn to_event(&self) -> Result<RecurringEvent, DomainError> {
        RecurringEvent::from_label(self.name.clone(), &self.date, self.effective_kind())
    }
}

impl From<&RecurringEvent> for EventEntry {
    fn from(event: &RecurringEvent) -> Self {
        Self {
            name: event.name.clone(),
            date: event.date.to_string(),
            kind: Some(event.kind),
        }
    }
}

/// Built-in event list as config entries
pub(crate) fn default_event_entries() -> Vec<EventEntry> {
    default_events().iter().map(EventEntry::from).collect()
}

/// Convert entries into domain events, skipping the unparsable ones
pub(crate) fn parse_events(entries: &[EventEntry]) -> Vec<RecurringEvent> {
    entries
        .iter()
        .filter_map(|entry| match entry.to_event() {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(name = %entry.name, date = %entry.date, error = %e, "Skipping invalid event");
                None
            },
        })
        .collect()
}

/// Anniversary selection section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryAppConfig {
    /// Events this many days out or closer are reported
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,

    /// Events whose name contains this marker are always reported
    #[serde(default = "default_important_marker")]
    pub important_marker: String,
}

fn default_horizon_days() -> i64 {
    AnniversaryPolicy::default().horizon_days
}

fn default_important_marker() -> String {
    AnniversaryPolicy::default().important_marker
}

impl Default for AnniversaryAppConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            important_marker: default_important_marker(),
        }
    }
}

impl AnniversaryAppConfig {
    /// Selection policy for the anniversary job
    #[must_use]
    pub fn policy(&self) -> AnniversaryPolicy {
        AnniversaryPolicy {
            horizon_days: self.horizon_days,
            important_marker: self.important_marker.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entries_round_trip() {
        let entries = default_event_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].name, "妈妈农历生日");
        assert_eq!(entries[0].date, "11月10日");
        assert_eq!(parse_events(&entries), default_events());
    }

    #[test]
    fn kind_inferred_from_name() {
        let lunar = EventEntry {
            name: "外婆农历生日".to_string(),
            date: "7月24日".to_string(),
            kind: None,
        };
        assert_eq!(lunar.effective_kind(), CalendarKind::Lunar);

        let solar = EventEntry {
            name: "结婚纪念日".to_string(),
            date: "5月20日".to_string(),
            kind: None,
        };
        assert_eq!(solar.effective_kind(), CalendarKind::Solar);
    }

    #[test]
    fn explicit_kind_wins() {
        let entry = EventEntry {
            name: "农历新年聚会".to_string(),
            date: "1月1日".to_string(),
            kind: Some(CalendarKind::Solar),
        };
        assert_eq!(entry.to_event().unwrap().kind, CalendarKind::Solar);
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let entries = vec![
            EventEntry {
                name: "坏日期".to_string(),
                date: "13月1日".to_string(),
                kind: None,
            },
            EventEntry {
                name: "好日期".to_string(),
                date: "2月14日".to_string(),
                kind: None,
            },
        ];
        let events = parse_events(&entries);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "好日期");
    }

    #[test]
    fn anniversary_policy_from_section() {
        let section = AnniversaryAppConfig {
            horizon_days: 3,
            important_marker: "!".to_string(),
        };
        let policy = section.policy();
        assert_eq!(policy.horizon_days, 3);
        assert_eq!(policy.important_marker, "!");
    }
}
