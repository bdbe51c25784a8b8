//! Reminder CLI
//!
//! Shared bootstrap for the reminder binaries: configuration, logging,
//! job wiring and exit codes. Each binary runs one or two jobs and exits.

pub mod cli;
pub mod jobs;

use std::process::ExitCode;

use anyhow::Context;
use application::{ApplicationError, JobOutcome};
use infrastructure::{AppConfig, Job, LoggingConfig, init_logging};
use tracing::{error, info};

/// Exit status when every job completed, including "nothing to send"
pub const EXIT_OK: u8 = 0;

/// Exit status when a job failed at runtime
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when configuration is missing or invalid
pub const EXIT_CONFIG: u8 = 2;

/// Load configuration and install logging
pub fn load_and_init() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;
    Ok(config)
}

/// Bootstrap a binary, or the exit code to stop with
pub fn start() -> Result<AppConfig, ExitCode> {
    match load_and_init() {
        Ok(config) => {
            info!(timezone = %config.timezone, "Configuration loaded");
            Ok(config)
        },
        Err(e) => {
            let _ = init_logging(&LoggingConfig::default());
            error!(error = format!("{e:#}"), "Startup failed");
            Err(ExitCode::from(EXIT_CONFIG))
        },
    }
}

/// Exit status for a set of job results
///
/// Configuration errors take precedence over runtime failures.
#[must_use]
pub fn exit_status(results: &[(Job, Result<JobOutcome, ApplicationError>)]) -> u8 {
    let errors = results.iter().filter_map(|(_, result)| result.as_ref().err());
    let mut status = EXIT_OK;
    for err in errors {
        if err.is_configuration() {
            return EXIT_CONFIG;
        }
        status = EXIT_FAILURE;
    }
    status
}

/// Log every job result and turn them into the process exit code
pub fn finish(results: &[(Job, Result<JobOutcome, ApplicationError>)]) -> ExitCode {
    for (job, result) in results {
        match result {
            Ok(JobOutcome::Sent { title }) => info!(job = %job, title = %title, "Reminder sent"),
            Ok(JobOutcome::NothingToSend { reason }) => {
                info!(job = %job, reason = %reason, "Nothing to send");
            },
            Err(e) => error!(job = %job, error = %e, "Job failed"),
        }
    }
    ExitCode::from(exit_status(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent() -> Result<JobOutcome, ApplicationError> {
        Ok(JobOutcome::Sent {
            title: "节日提醒".to_string(),
        })
    }

    #[test]
    fn all_ok_is_zero() {
        let results = vec![
            (Job::Holiday, sent()),
            (Job::Anniversary, Ok(JobOutcome::nothing("no upcoming dates"))),
        ];
        assert_eq!(exit_status(&results), EXIT_OK);
    }

    #[test]
    fn runtime_failure_is_one() {
        let results = vec![
            (Job::Holiday, Err(ApplicationError::Fetch("HTTP 500".to_string()))),
            (Job::Anniversary, sent()),
        ];
        assert_eq!(exit_status(&results), EXIT_FAILURE);
    }

    #[test]
    fn configuration_failure_wins() {
        let results = vec![
            (Job::Holiday, Err(ApplicationError::Fetch("HTTP 500".to_string()))),
            (
                Job::Anniversary,
                Err(ApplicationError::Configuration("PUSHPLUS_TOKEN is not set".to_string())),
            ),
        ];
        assert_eq!(exit_status(&results), EXIT_CONFIG);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(exit_status(&[]), EXIT_OK);
    }
}
