//! love-reminder
//!
//! Sends one daily quote.

use std::process::ExitCode;

use clap::Parser;
use infrastructure::Job;
use presentation_cli::cli::LoveReminderCli;
use presentation_cli::{finish, jobs, start};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = LoveReminderCli::parse();
    let config = match start() {
        Ok(config) => config,
        Err(code) => return code,
    };

    let result = jobs::run_quote(&config).await;
    finish(&[(Job::Quote, result)])
}
