//! Timezone value object

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A validated IANA timezone used to decide what "today" is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns `UnknownTimezone` if the name is not in the IANA database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        Tz::from_str(name.trim())
            .map(Self)
            .map_err(|_| DomainError::UnknownTimezone(name.to_string()))
    }

    /// Asia/Shanghai, the zone the reminders were written for
    #[must_use]
    pub const fn shanghai() -> Self {
        Self(chrono_tz::Asia::Shanghai)
    }

    /// Get the timezone name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Current calendar date in this timezone
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::shanghai()
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timezone> for String {
    fn from(value: Timezone) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
