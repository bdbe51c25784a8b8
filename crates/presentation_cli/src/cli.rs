//! Command-line definitions
//!
//! The binaries take no options of their own; clap provides `--help` and
//! `--version` and rejects anything else.

use clap::Parser;

/// Holiday and anniversary reminder
#[derive(Debug, Parser)]
#[command(name = "event-reminder")]
#[command(version, about = "Send tomorrow's holiday and upcoming personal dates via PushPlus", long_about = None)]
pub struct EventReminderCli {}

/// Daily quote reminder
#[derive(Debug, Parser)]
#[command(name = "love-reminder")]
#[command(version, about = "Send a daily quote via PushPlus", long_about = None)]
pub struct LoveReminderCli {}

/// Weather reminder
#[derive(Debug, Parser)]
#[command(name = "weather-reminder")]
#[command(version, about = "Send tomorrow's weather report to the PushPlus group", long_about = None)]
pub struct WeatherReminderCli {}
