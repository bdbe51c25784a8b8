//! Lunar (Chinese lunisolar) calendar date
//!
//! Conversion uses the usual compressed year table: for each lunar year one
//! `u32` whose bits encode
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 4-15: month lengths, bit `0x10000 >> m` set means month `m` has 30 days
//! - bit 16: the leap month has 30 days
//!
//! Lunar 1900-01-01 falls on solar 1900-01-31.
//!
//! The table is the widely published `lunarInfo` table for 1900-2100 (the
//! same values as `yearInfos` in the `lunardate` package on PyPI), derived
//! from the Hong Kong Observatory Gregorian-Lunar conversion tables. Entries
//! can be audited against those tables year by year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// First lunar year covered by the conversion table
pub const LUNAR_MIN_YEAR: i32 = 1900;
/// Last lunar year covered by the conversion table
pub const LUNAR_MAX_YEAR: i32 = 2100;

/// `NaiveDate::num_days_from_ce` of 1900-01-31 (lunar 1900-01-01)
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                  // 2100
];

fn year_info(year: i32) -> Result<u32, DomainError> {
    usize::try_from(year - LUNAR_MIN_YEAR)
        .ok()
        .and_then(|index| LUNAR_INFO.get(index).copied())
        .ok_or(DomainError::LunarYearOutOfRange(year))
}

/// Leap month of a lunar year, if it has one
pub(crate) fn leap_month(year: i32) -> Result<Option<u32>, DomainError> {
    let month = year_info(year)? & 0xf;
    Ok((month != 0).then_some(month))
}

fn leap_month_days(year: i32) -> Result<i32, DomainError> {
    let info = year_info(year)?;
    Ok(match info & 0xf {
        0 => 0,
        _ if info & 0x10000 != 0 => 30,
        _ => 29,
    })
}

/// Number of days in a regular (non-leap) lunar month
pub(crate) fn month_days(year: i32, month: u32) -> Result<i32, DomainError> {
    let info = year_info(year)?;
    Ok(if info & (0x10000 >> month) == 0 { 29 } else { 30 })
}

fn year_days(year: i32) -> Result<i32, DomainError> {
    let mut total = leap_month_days(year)?;
    for month in 1..=12 {
        total += month_days(year, month)?;
    }
    Ok(total)
}

/// A date in the Chinese lunisolar calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
}

impl LunarDate {
    /// Create a validated lunar date
    ///
    /// # Errors
    ///
    /// Returns `LunarYearOutOfRange` for years outside 1900-2100 and
    /// `InvalidLunarDate` if the month is not 1-12, the year has no such leap
    /// month, or the day exceeds the month length.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, DomainError> {
        year_info(year)?;

        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidLunarDate(format!(
                "{year}年{month}月{day}日: month must be 1-12"
            )));
        }

        let length = if is_leap_month {
            if leap_month(year)? != Some(month) {
                return Err(DomainError::InvalidLunarDate(format!(
                    "{year}年 has no leap month {month}"
                )));
            }
            leap_month_days(year)?
        } else {
            month_days(year, month)?
        };

        if day < 1 || i64::from(day) > i64::from(length) {
            return Err(DomainError::InvalidLunarDate(format!(
                "{year}年{month}月{day}日: month has {length} days"
            )));
        }

        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Convert a solar (Gregorian) date to its lunar date
    ///
    /// # Errors
    ///
    /// Returns `LunarYearOutOfRange` if the date lies outside lunar years 1900-2100.
    pub fn from_solar(date: NaiveDate) -> Result<Self, DomainError> {
        let mut offset = date.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
        if offset < 0 {
            return Err(DomainError::LunarYearOutOfRange(date.year()));
        }

        let mut year = LUNAR_MIN_YEAR;
        loop {
            let days = year_days(year).map_err(|_| DomainError::LunarYearOutOfRange(year))?;
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap = leap_month(year)?;
        for month in 1..=12 {
            let days = month_days(year, month)?;
            if offset < days {
                return Self::new(year, month, day_from_offset(offset), false);
            }
            offset -= days;

            if leap == Some(month) {
                let days = leap_month_days(year)?;
                if offset < days {
                    return Self::new(year, month, day_from_offset(offset), true);
                }
                offset -= days;
            }
        }

        Err(DomainError::InvalidLunarDate(format!(
            "no lunar date for solar {date}"
        )))
    }

    /// Convert to the corresponding solar (Gregorian) date
    ///
    /// # Errors
    ///
    /// Only fails for values that bypassed validation.
    pub fn to_solar(&self) -> Result<NaiveDate, DomainError> {
        let mut offset = 0;
        for year in LUNAR_MIN_YEAR..self.year {
            offset += year_days(year)?;
        }

        let leap = leap_month(self.year)?;
        for month in 1..self.month {
            offset += month_days(self.year, month)?;
            if leap == Some(month) {
                offset += leap_month_days(self.year)?;
            }
        }
        if self.is_leap_month {
            offset += month_days(self.year, self.month)?;
        }

        let day_offset = i32::try_from(self.day).map_err(|_| {
            DomainError::InvalidLunarDate(format!("day {} out of range", self.day))
        })?;
        offset += day_offset - 1;

        NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + offset).ok_or_else(|| {
            DomainError::InvalidLunarDate(format!("{self} has no solar equivalent"))
        })
    }

    /// Get the lunar year
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Get the lunar month (1-12)
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Get the day of the lunar month (1-30)
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Whether this date lies in the intercalary (leap) month
    #[must_use]
    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Month and day in `M月D日` form, the way events are written
    #[must_use]
    pub fn month_day_label(&self) -> String {
        let leap = if self.is_leap_month { "闰" } else { "" };
        format!("{leap}{}月{}日", self.month, self.day)
    }
}

/// Lunar month and day of a solar date, as `M月D日`
///
/// # Errors
///
/// Returns an error if `date` lies outside the supported lunar years.
pub fn today_lunar(date: NaiveDate) -> Result<String, DomainError> {
    LunarDate::from_solar(date).map(|lunar| lunar.month_day_label())
}

fn day_from_offset(offset: i32) -> u32 {
    u32::try_from(offset + 1).unwrap_or(1)
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "农历{}年{}", self.year, self.month_day_label())
    }
}
