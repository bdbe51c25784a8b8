//! Application services - Use case implementations

mod anniversary_service;
mod holiday_service;
mod quote_service;
mod weather_service;

pub use anniversary_service::{
    AnniversaryPolicy, AnniversaryReport, AnniversaryService, EventFailure, evaluate_events,
};
pub use holiday_service::HolidayService;
pub use quote_service::{QuotePolicy, QuoteService};
pub use weather_service::{WeatherReportConfig, WeatherService};
