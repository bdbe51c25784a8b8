//! Infrastructure adapters
//!
//! Adapters connect application ports to the upstream HTTP clients and map
//! client errors into `ApplicationError`.

mod calendar_adapter;
mod pushplus_adapter;
mod quote_adapter;
mod weather_adapter;

pub use calendar_adapter::JuheHolidayAdapter;
pub use pushplus_adapter::PushPlusNotificationAdapter;
pub use quote_adapter::TianQuoteAdapter;
pub use weather_adapter::AmapWeatherAdapter;
