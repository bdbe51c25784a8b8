//! weather-reminder
//!
//! Sends tomorrow's weather report to the PushPlus group topic.

use std::process::ExitCode;

use clap::Parser;
use infrastructure::Job;
use presentation_cli::cli::WeatherReminderCli;
use presentation_cli::{finish, jobs, start};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = WeatherReminderCli::parse();
    let config = match start() {
        Ok(config) => config,
        Err(code) => return code,
    };

    let today = config.timezone.today();
    let result = jobs::run_weather(&config, today).await;
    finish(&[(Job::Weather, result)])
}
