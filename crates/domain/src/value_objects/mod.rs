//! Value Objects - Immutable, identity-less domain primitives

mod audience;
mod calendar_kind;
mod lunar_date;
mod month_day;
mod timezone;

pub use audience::Audience;
pub use calendar_kind::CalendarKind;
pub use lunar_date::{LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, LunarDate, today_lunar};
pub use month_day::MonthDay;
pub use timezone::Timezone;
