//! Juhe calendar integration
//!
//! Client for the Juhe perpetual calendar API (<https://www.juhe.cn/docs/api/id/177>).
//! Looks up a single day and reports the holiday falling on it, if any.

pub mod client;
mod models;

pub use client::{CalendarClient, CalendarConfig, CalendarError, JuheCalendarClient};
pub use models::{CalendarDay, format_query_date};
