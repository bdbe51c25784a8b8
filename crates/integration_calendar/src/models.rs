//! Calendar data models

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day as reported by the calendar API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Date string as returned, e.g. `2025-10-1`
    pub date: String,
    /// Holiday name, absent or empty on ordinary days
    #[serde(default)]
    pub holiday: Option<String>,
    /// Weekday label, e.g. `星期三`
    #[serde(default)]
    pub weekday: Option<String>,
    /// Lunar date label, e.g. `八月初十`
    #[serde(default)]
    pub lunar: Option<String>,
    /// Lunar year label, e.g. `乙巳年`
    #[serde(default, rename = "lunarYear")]
    pub lunar_year: Option<String>,
    /// Zodiac animal of the year
    #[serde(default, rename = "animalsYear")]
    pub animals_year: Option<String>,
}

/// Format a date the way the API expects it: `Y-M-D` without zero padding
#[must_use]
pub fn format_query_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Raw API response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub result: Option<ApiResult>,
    #[serde(default)]
    pub error_code: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResult {
    #[serde(default)]
    pub data: Option<CalendarDay>,
}
