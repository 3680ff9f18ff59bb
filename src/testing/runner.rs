//! Suite runner
//!
//! Logs in once, runs every scenario in order against the shared session and
//! state, then releases the session whatever the outcomes were.

use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::Instrument;

use crate::api::Session;
use crate::common::config::Config;
use crate::common::Result;

use super::outcome::ScenarioOutcome;
use super::report::{print_result, RunReport, ScenarioResult};
use super::scenarios::{Scenario, ORDERED};
use super::state::RunState;

/// Presentation options for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Suppress per-scenario terminal output
    pub quiet: bool,
}

/// Run the full suite
///
/// Setup errors (bad config, failed login) are returned before any scenario
/// runs. Scenario failures are recorded in the report instead.
pub async fn run_suite(config: &Config, options: RunOptions) -> Result<RunReport> {
    let base_url = config.base_url()?;

    if !options.quiet {
        println!(
            "\n{} {}",
            "Running Foody API suite against".blue().bold(),
            base_url.white().bold()
        );
    }

    let session =
        Session::connect(&base_url, &config.credentials, &config.service.user_agent).await?;

    let report = run_scenarios(&session, &ORDERED, options).await;

    session.release();

    if !options.quiet {
        report.print_summary();
    }

    Ok(report)
}

/// Run scenarios in slice order against an existing session
///
/// A fresh [`RunState`] is created for the call.
pub async fn run_scenarios(
    session: &Session,
    scenarios: &[Scenario],
    options: RunOptions,
) -> RunReport {
    let mut state = RunState::new();
    let mut report = RunReport::new(session.base_url());

    if !options.quiet {
        println!("\n{}", "Scenarios:".cyan());
    }

    for (i, scenario) in scenarios.iter().enumerate() {
        let span = tracing::info_span!("scenario", name = scenario.name());
        let started = Instant::now();

        let outcome = match scenario.run(session, &mut state).instrument(span).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(scenario = scenario.name(), error = %e, "Request failed");
                ScenarioOutcome::fail(e.to_string())
            }
        };

        let result = ScenarioResult {
            order: i + 1,
            name: scenario.name(),
            outcome,
            elapsed_ms: elapsed_ms(started.elapsed()),
        };

        if !options.quiet {
            print_result(&result);
        }
        report.push(result);
    }

    report
}

/// Whole milliseconds, saturating at `u64::MAX`
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms() {
        assert_eq!(elapsed_ms(Duration::from_micros(2_500)), 2);
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
