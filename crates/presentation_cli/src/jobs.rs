//! Job wiring
//!
//! Each function validates the credentials its job needs, builds the
//! adapters and runs the application service once.

use std::sync::Arc;

use application::{
    AnniversaryService, ApplicationError, HolidayService, JobOutcome, NotificationPort,
    QuoteService, WeatherService,
};
use chrono::NaiveDate;
use infrastructure::{
    AmapWeatherAdapter, AppConfig, Job, JuheHolidayAdapter, PushPlusNotificationAdapter,
    TianQuoteAdapter,
};
use tracing::{error, instrument};

/// Results of one binary run, in execution order
pub type JobResults = Vec<(Job, Result<JobOutcome, ApplicationError>)>;

/// Validate the credentials of every job a binary runs
///
/// Stops at the first job with a missing key so nothing is fetched or
/// sent when the configuration is incomplete.
pub fn preflight(config: &AppConfig, jobs: &[Job]) -> Result<(), (Job, ApplicationError)> {
    for &job in jobs {
        config.require_for(job).map_err(|e| (job, e))?;
    }
    Ok(())
}

fn notifier(config: &AppConfig) -> Result<Arc<dyn NotificationPort>, ApplicationError> {
    Ok(Arc::new(PushPlusNotificationAdapter::from_app_config(
        config,
    )?))
}

/// Holiday check followed by the anniversary check
///
/// A configuration error in either job ends the run before any request.
/// Once both are configured, a runtime failure in one does not skip the other.
pub async fn run_event_reminder(config: &AppConfig, today: NaiveDate) -> JobResults {
    if let Err((job, e)) = preflight(config, &[Job::Holiday, Job::Anniversary]) {
        error!(job = %job, "Configuration incomplete, nothing was run");
        return vec![(job, Err(e))];
    }

    vec![
        (Job::Holiday, run_holiday(config, today).await),
        (Job::Anniversary, run_anniversary(config, today).await),
    ]
}

/// Notify about a holiday falling on the day after `today`
#[instrument(skip(config))]
pub async fn run_holiday(
    config: &AppConfig,
    today: NaiveDate,
) -> Result<JobOutcome, ApplicationError> {
    config.require_for(Job::Holiday)?;
    let service = HolidayService::new(
        Arc::new(JuheHolidayAdapter::from_app_config(config)?),
        notifier(config)?,
    );
    service.run(today).await
}

/// Notify about configured personal dates coming up
#[instrument(skip(config))]
pub async fn run_anniversary(
    config: &AppConfig,
    today: NaiveDate,
) -> Result<JobOutcome, ApplicationError> {
    config.require_for(Job::Anniversary)?;
    let service = AnniversaryService::new(
        notifier(config)?,
        config.recurring_events(),
        config.anniversary.policy(),
    );
    service.run(today).await
}

/// Send one accepted quote
#[instrument(skip(config))]
pub async fn run_quote(config: &AppConfig) -> Result<JobOutcome, ApplicationError> {
    config.require_for(Job::Quote)?;
    let service = QuoteService::new(
        Arc::new(TianQuoteAdapter::from_app_config(config)?),
        notifier(config)?,
        config.quotes.policy(),
    );
    service.run().await
}

/// Send tomorrow's weather report to the group topic
#[instrument(skip(config))]
pub async fn run_weather(
    config: &AppConfig,
    today: NaiveDate,
) -> Result<JobOutcome, ApplicationError> {
    config.require_for(Job::Weather)?;
    let service = WeatherService::new(
        Arc::new(AmapWeatherAdapter::from_app_config(config)?),
        notifier(config)?,
        config.weather.report_config(),
    );
    service.run(today).await
}
