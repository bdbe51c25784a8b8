//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! integration clients, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AnniversaryAppConfig, AppConfig, CONFIG_PATH_ENV, CalendarAppConfig, ConfigLoadError,
    DEFAULT_CONFIG_FILE, EventEntry, Job, PushPlusAppConfig, QuotesAppConfig, WeatherAppConfig,
};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
