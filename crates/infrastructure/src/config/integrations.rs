//! Upstream service sections: Juhe calendar, TianAPI, AMap, PushPlus.
//!
//! Keys and tokens live at the top level of [`super::AppConfig`] under their
//! historical environment names; these sections only carry endpoints,
//! timeouts and formatting knobs.

use application::{QuotePolicy, WeatherReportConfig};
use integration_calendar::CalendarConfig;
use integration_pushplus::PushPlusConfig;
use integration_quotes::QuoteConfig;
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

const fn default_timeout() -> u64 {
    30
}

// ==============================
// Calendar Configuration
// ==============================

/// Juhe calendar section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAppConfig {
    /// API base URL
    #[serde(default = "default_calendar_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_calendar_base_url() -> String {
    "http://v.juhe.cn".to_string()
}

impl Default for CalendarAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_calendar_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CalendarAppConfig {
    /// Client configuration with the key filled in
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> CalendarConfig {
        CalendarConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            api_key: api_key.expose_secret().to_owned(),
        }
    }
}

// ==============================
// Quote Configuration
// ==============================

/// TianAPI section plus the acceptance rules for quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotesAppConfig {
    /// API base URL
    #[serde(default = "default_quotes_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Phrases that cause a quote to be rejected
    #[serde(default = "default_blocklist")]
    pub blocklist: Vec<String>,

    /// Fetches per run before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Text placed in front of the accepted quote
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_quotes_base_url() -> String {
    "https://apis.tianapi.com".to_string()
}

fn default_blocklist() -> Vec<String> {
    QuotePolicy::default().blocklist
}

fn default_max_attempts() -> u32 {
    QuotePolicy::default().max_attempts
}

fn default_greeting() -> String {
    QuotePolicy::default().greeting
}

impl Default for QuotesAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_quotes_base_url(),
            timeout_secs: default_timeout(),
            blocklist: default_blocklist(),
            max_attempts: default_max_attempts(),
            greeting: default_greeting(),
        }
    }
}

impl QuotesAppConfig {
    /// Client configuration with the key filled in
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> QuoteConfig {
        QuoteConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            api_key: api_key.expose_secret().to_owned(),
        }
    }

    /// Acceptance rules for the quote job
    #[must_use]
    pub fn policy(&self) -> QuotePolicy {
        QuotePolicy {
            blocklist: self.blocklist.clone(),
            max_attempts: self.max_attempts.max(1),
            greeting: self.greeting.clone(),
        }
    }
}

// ==============================
// Weather Configuration
// ==============================

/// AMap weather section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// AMap district code
    #[serde(default = "default_city")]
    pub city: String,

    /// Label placed in front of the district name in the report
    #[serde(default = "default_city_prefix")]
    pub city_prefix: String,
}

fn default_weather_base_url() -> String {
    "https://restapi.amap.com".to_string()
}

fn default_city() -> String {
    "450103".to_string()
}

fn default_city_prefix() -> String {
    WeatherReportConfig::default().city_prefix
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout(),
            city: default_city(),
            city_prefix: default_city_prefix(),
        }
    }
}

impl WeatherAppConfig {
    /// Client configuration with the key filled in
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            city: self.city.clone(),
            api_key: api_key.expose_secret().to_owned(),
        }
    }

    /// Formatting options for the weather report
    #[must_use]
    pub fn report_config(&self) -> WeatherReportConfig {
        WeatherReportConfig {
            city_prefix: self.city_prefix.clone(),
        }
    }
}

// ==============================
// PushPlus Configuration
// ==============================

/// PushPlus section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPlusAppConfig {
    /// API base URL
    #[serde(default = "default_pushplus_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Rendering template
    #[serde(default = "default_template")]
    pub template: String,

    /// Delivery channel
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_pushplus_base_url() -> String {
    "http://www.pushplus.plus".to_string()
}

fn default_template() -> String {
    "txt".to_string()
}

fn default_channel() -> String {
    "mail".to_string()
}

impl Default for PushPlusAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_pushplus_base_url(),
            timeout_secs: default_timeout(),
            template: default_template(),
            channel: default_channel(),
        }
    }
}

impl PushPlusAppConfig {
    /// Client configuration with the token filled in
    #[must_use]
    pub fn client_config(&self, token: &SecretString) -> PushPlusConfig {
        PushPlusConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            template: self.template.clone(),
            channel: self.channel.clone(),
            token: token.expose_secret().to_owned(),
        }
    }
}
