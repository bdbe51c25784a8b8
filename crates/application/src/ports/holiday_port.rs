//! Holiday calendar port
//!
//! Defines the interface for looking up public holidays on a given day.

use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Calendar information for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Date as reported by the calendar service (e.g. `2024-10-1`)
    pub date: String,
    /// Holiday name, `None` when the day is not a holiday
    pub holiday: Option<String>,
}

impl CalendarDay {
    /// Holiday name if present and non-blank
    #[must_use]
    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Port for holiday lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HolidayPort: Send + Sync {
    /// Get calendar information for `date`
    async fn calendar_day(&self, date: NaiveDate) -> Result<CalendarDay, ApplicationError>;
}
