//! grid-calc: button-grid calculator for the terminal

use std::process::ExitCode;

use clap::Parser;
use grid_calculator::cli::{build_config, run, Cli};
use grid_calculator::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
