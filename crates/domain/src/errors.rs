//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A `M月D日` label could not be parsed
    #[error("Invalid month-day label: {0}")]
    InvalidMonthDay(String),

    /// Month/day combination does not exist in the solar calendar
    #[error("Invalid solar date: {year}-{month}-{day}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },

    /// Lunar date does not exist (wrong leap month, day past month end)
    #[error("Invalid lunar date: {0}")]
    InvalidLunarDate(String),

    /// Lunar year not covered by the conversion table
    #[error("Lunar year {0} is outside the supported range 1900-2100")]
    LunarYearOutOfRange(i32),

    /// Timezone name not found in the IANA database
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid solar date error
    pub const fn invalid_solar(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidSolarDate { year, month, day }
    }
}
