//! CLI command handling
//!
//! Dispatches CLI commands to the library and formats output.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::testing::{self, RunOptions, ORDERED};

/// Process exit code: all scenarios passed
pub const EXIT_PASSED: i32 = 0;
/// Process exit code: a scenario failed or was skipped, or the run broke after setup
pub const EXIT_NOT_PASSED: i32 = 1;
/// Process exit code: configuration or login failed, no scenario ran
pub const EXIT_SETUP: i32 = 2;

/// Map the outcome of [`dispatch`] to a process exit code
pub fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => EXIT_PASSED,
        Ok(false) => EXIT_NOT_PASSED,
        Err(e) if e.is_setup() => EXIT_SETUP,
        Err(_) => EXIT_NOT_PASSED,
    }
}

/// Dispatch a CLI command
///
/// Returns `Ok(false)` when the suite ran but did not fully pass.
pub async fn dispatch(command: Commands) -> Result<bool> {
    match command {
        Commands::Run {
            base_url,
            username,
            password,
            config,
            json,
            quiet,
        } => {
            let config =
                Config::load(config.as_deref())?.with_overrides(base_url, username, password);

            let report = testing::run_suite(
                &config,
                RunOptions {
                    quiet: quiet || json,
                },
            )
            .await?;

            if json {
                println!("{}", report.to_json()?);
            } else if quiet {
                report.print_summary();
            }

            Ok(report.success())
        }

        Commands::List => {
            println!("{}", "Scenarios (execution order):".cyan());
            for (i, scenario) in ORDERED.iter().enumerate() {
                let needs = if scenario.requires_created_food() {
                    " [needs create]".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {}. {:<20} {:<6} {:<28} -> {}{}",
                    i + 1,
                    scenario.name(),
                    scenario.method(),
                    scenario.path_template(),
                    scenario.expected_status().as_u16(),
                    needs
                );
                println!("     {}", scenario.description().dimmed());
            }
            Ok(true)
        }

        Commands::Config { config, path } => {
            if path {
                let path = paths::config_path().ok_or_else(|| {
                    Error::Config("Could not determine a configuration directory".to_string())
                })?;
                println!("{}", path.display());
                return Ok(true);
            }

            let config = Config::load(config.as_deref())?;
            print!("{}", config.to_redacted_toml()?);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(true)), EXIT_PASSED);
        assert_eq!(exit_code(&Ok(false)), EXIT_NOT_PASSED);
        assert_eq!(exit_code(&Err(Error::token_missing("accessToken"))), EXIT_SETUP);
        assert_eq!(
            exit_code(&Err(Error::Config("bad base URL".to_string()))),
            EXIT_SETUP
        );
    }

    #[test]
    fn test_non_setup_error_is_not_setup_exit() {
        let err: Error = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert_eq!(exit_code(&Err(err)), EXIT_NOT_PASSED);
        assert_eq!(
            exit_code(&Err(Error::InvalidUrl("http://x".to_string()))),
            EXIT_NOT_PASSED
        );
    }
}
