//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: Juhe calendar, TianAPI, AMap, PushPlus
//! - `jobs`: recurring events and the anniversary policy
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `reminders.toml` in the working directory (path overridable via `REMINDERS_CONFIG`)
//! 3. environment variables: the credentials under their historical names
//!    (`CALENDARAPI_KEY`, `TIAN_KEY`, `AMAP_KEY`, `PUSHPLUS_TOKEN`,
//!    `PUSHPLUS_GROUP_TOPIC`) and section keys as `SECTION__KEY`
//!    (e.g. `WEATHER__CITY`)

mod integrations;
mod jobs;

use std::fmt;

use application::ApplicationError;
use domain::{RecurringEvent, Timezone};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub use integrations::{CalendarAppConfig, PushPlusAppConfig, QuotesAppConfig, WeatherAppConfig};
pub use jobs::{AnniversaryAppConfig, EventEntry};

use crate::telemetry::LoggingConfig;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "REMINDERS_CONFIG";

/// Config file looked up when `REMINDERS_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "reminders.toml";

/// Top-level keys read from the environment under their own names
const CREDENTIAL_KEYS: [&str; 5] = [
    "calendarapi_key",
    "tian_key",
    "amap_key",
    "pushplus_token",
    "pushplus_group_topic",
];

/// Sections that may be overridden through `SECTION__KEY` variables
const SECTIONS: [&str; 7] = [
    "calendar",
    "quotes",
    "weather",
    "pushplus",
    "anniversary",
    "logging",
    "timezone",
];

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),
}

impl From<ConfigLoadError> for ApplicationError {
    fn from(err: ConfigLoadError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Reminder job selection, used to validate the credentials a run needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Tomorrow's holiday lookup
    Holiday,
    /// Upcoming personal dates
    Anniversary,
    /// Daily quote
    Quote,
    /// Weather report for the group topic
    Weather,
}

impl Job {
    /// Environment names of the settings this job cannot run without
    #[must_use]
    pub const fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Holiday => &["PUSHPLUS_TOKEN", "CALENDARAPI_KEY"],
            Self::Anniversary => &["PUSHPLUS_TOKEN"],
            Self::Quote => &["PUSHPLUS_TOKEN", "TIAN_KEY"],
            Self::Weather => &["PUSHPLUS_TOKEN", "AMAP_KEY", "PUSHPLUS_GROUP_TOPIC"],
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holiday => write!(f, "holiday"),
            Self::Anniversary => write!(f, "anniversary"),
            Self::Quote => write!(f, "quote"),
            Self::Weather => write!(f, "weather"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Juhe calendar key (`CALENDARAPI_KEY`)
    #[serde(default)]
    pub calendarapi_key: Option<SecretString>,

    /// TianAPI key (`TIAN_KEY`)
    #[serde(default)]
    pub tian_key: Option<SecretString>,

    /// AMap key (`AMAP_KEY`)
    #[serde(default)]
    pub amap_key: Option<SecretString>,

    /// PushPlus token (`PUSHPLUS_TOKEN`)
    #[serde(default)]
    pub pushplus_token: Option<SecretString>,

    /// PushPlus group topic for group messages (`PUSHPLUS_GROUP_TOPIC`)
    #[serde(default)]
    pub pushplus_group_topic: Option<String>,

    /// Zone that decides what "today" is
    #[serde(default)]
    pub timezone: Timezone,

    /// Juhe calendar configuration
    #[serde(default)]
    pub calendar: CalendarAppConfig,

    /// TianAPI configuration and quote rules
    #[serde(default)]
    pub quotes: QuotesAppConfig,

    /// AMap configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// PushPlus configuration
    #[serde(default)]
    pub pushplus: PushPlusAppConfig,

    /// Recurring personal dates
    #[serde(default = "jobs::default_event_entries")]
    pub events: Vec<EventEntry>,

    /// Anniversary selection rules
    #[serde(default)]
    pub anniversary: AnniversaryAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            calendarapi_key: None,
            tian_key: None,
            amap_key: None,
            pushplus_token: None,
            pushplus_group_topic: None,
            timezone: Timezone::default(),
            calendar: CalendarAppConfig::default(),
            quotes: QuotesAppConfig::default(),
            weather: WeatherAppConfig::default(),
            pushplus: PushPlusAppConfig::default(),
            events: jobs::default_event_entries(),
            anniversary: AnniversaryAppConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and the process environment
    pub fn load() -> Result<Self, ConfigLoadError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
        Self::load_from(&path, vars)
    }

    /// Load configuration from an explicit file and set of variables
    ///
    /// The file is optional. Variables that are neither credentials nor
    /// `SECTION__KEY` overrides are ignored.
    pub fn load_from(
        path: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigLoadError> {
        let env = relevant_env(vars);
        debug!(path = %path, overrides = env.len(), "Loading configuration");

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., AMAP_KEY, WEATHER__CITY)
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .source(Some(env)),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Check that every setting `job` needs is present and non-empty
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first missing key.
    pub fn require_for(&self, job: Job) -> Result<(), ApplicationError> {
        for key in job.required_keys() {
            if !self.has_value(key) {
                return Err(ApplicationError::Configuration(format!(
                    "{key} is not set (required by the {job} job)"
                )));
            }
        }
        Ok(())
    }

    fn has_value(&self, key: &str) -> bool {
        let secret = |value: &Option<SecretString>| {
            value
                .as_ref()
                .is_some_and(|s| !s.expose_secret().trim().is_empty())
        };
        match key {
            "CALENDARAPI_KEY" => secret(&self.calendarapi_key),
            "TIAN_KEY" => secret(&self.tian_key),
            "AMAP_KEY" => secret(&self.amap_key),
            "PUSHPLUS_TOKEN" => secret(&self.pushplus_token),
            "PUSHPLUS_GROUP_TOPIC" => self
                .pushplus_group_topic
                .as_deref()
                .is_some_and(|topic| !topic.trim().is_empty()),
            _ => false,
        }
    }

    /// Recurring events from the `[[events]]` table, invalid entries skipped
    #[must_use]
    pub fn recurring_events(&self) -> Vec<RecurringEvent> {
        jobs::parse_events(&self.events)
    }

    /// Credential by environment name, or a configuration error
    pub(crate) fn credential(&self, key: &str) -> Result<&SecretString, ApplicationError> {
        let value = match key {
            "CALENDARAPI_KEY" => self.calendarapi_key.as_ref(),
            "TIAN_KEY" => self.tian_key.as_ref(),
            "AMAP_KEY" => self.amap_key.as_ref(),
            "PUSHPLUS_TOKEN" => self.pushplus_token.as_ref(),
            _ => None,
        };
        value
            .filter(|secret| !secret.expose_secret().trim().is_empty())
            .ok_or_else(|| ApplicationError::Configuration(format!("{key} is not set")))
    }
}

/// Keep only the variables this configuration reads, keyed in lowercase
fn relevant_env(vars: impl IntoIterator<Item = (String, String)>) -> config::Map<String, String> {
    vars.into_iter()
        .filter(|(name, _)| {
            let name = name.to_lowercase();
            CREDENTIAL_KEYS.contains(&name.as_str())
                || SECTIONS.iter().any(|section| {
                    name.strip_prefix(section)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with("__"))
                })
        })
        .map(|(name, value)| (name.to_lowercase(), value))
        .collect()
}
