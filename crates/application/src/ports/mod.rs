//! Port definitions for application layer
//!
//! Ports are interfaces that define how the jobs interact with external
//! systems. Adapters in the infrastructure layer implement these ports.

mod holiday_port;
mod notification_port;
mod quote_port;
mod weather_port;

#[cfg(test)]
pub use holiday_port::MockHolidayPort;
pub use holiday_port::{CalendarDay, HolidayPort};
#[cfg(test)]
pub use notification_port::MockNotificationPort;
pub use notification_port::NotificationPort;
#[cfg(test)]
pub use quote_port::MockQuotePort;
pub use quote_port::QuotePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{DailyCast, ForecastReport, LiveWeather, WeatherPort};
