//! Month/day value object in the `M月D日` notation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A month and day without a year, written as `11月10日`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a new month/day pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonthDay` if month is not in 1..=12 or day is not in 1..=31.
    /// Whether the day exists in a concrete year is checked on conversion.
    pub fn new(month: u32, day: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(DomainError::InvalidMonthDay(format!("{month}月{day}日")));
        }
        Ok(Self { month, day })
    }

    /// Get the month (1-12)
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Get the day of month (1-31)
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }
}

impl FromStr for MonthDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidMonthDay(s.to_string());

        let (month, rest) = s.trim().split_once('月').ok_or_else(invalid)?;
        let day = rest.strip_suffix('日').unwrap_or(rest);

        let month = month.trim().parse::<u32>().map_err(|_| invalid())?;
        let day = day.trim().parse::<u32>().map_err(|_| invalid())?;

        Self::new(month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}月{}日", self.month, self.day)
    }
}
