//! CLI command definitions
//!
//! Defines the clap commands for the foody CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the ordered scenario suite against the live service
    Run {
        /// Base address of the Foody API (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        /// Login user name (overrides the config file)
        #[arg(long, short)]
        username: Option<String>,

        /// Login password (overrides the config file)
        #[arg(long, short)]
        password: Option<String>,

        /// Configuration file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Only print the summary
        #[arg(long, short)]
        quiet: bool,
    },

    /// List the scenarios in execution order
    List,

    /// Show the effective configuration
    Config {
        /// Configuration file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only print the default configuration file path
        #[arg(long)]
        path: bool,
    },
}
