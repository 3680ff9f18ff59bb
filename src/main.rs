//! Foody API scenario runner
//!
//! Logs in to the Foody API once and runs the ordered CRUD scenarios against
//! the live service.

use clap::Parser;
use foody::common::logging;
use foody::{cli, commands::Commands};

#[derive(Parser)]
#[command(name = "foody", about = "Ordered end-to-end checks for the Foody API")]
#[command(version, long_about = None)]
struct Cli {
    /// Log every request at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    let result = cli::dispatch(cli.command).await;

    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }

    let code = cli::exit_code(&result);
    if code != cli::EXIT_PASSED {
        std::process::exit(code);
    }
}
