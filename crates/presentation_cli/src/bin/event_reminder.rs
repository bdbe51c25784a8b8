//! event-reminder
//!
//! Checks tomorrow's holiday, then the configured personal dates. Missing
//! credentials for either check stop the run before any request; a runtime
//! failure in one check does not stop the other.

use std::process::ExitCode;

use clap::Parser;
use presentation_cli::cli::EventReminderCli;
use presentation_cli::{finish, jobs, start};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = EventReminderCli::parse();
    let config = match start() {
        Ok(config) => config,
        Err(code) => return code,
    };

    let today = config.timezone.today();
    let results = jobs::run_event_reminder(&config, today).await;
    finish(&results)
}
