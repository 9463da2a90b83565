//! speakeasy-helpers CLI entry point
//!
//! Parses the command line, installs logging, runs the command against the
//! current directory and renders any error with context and a suggestion.

use anyhow::{Context, Result};
use clap::Parser;
use speakeasy_helpers::cli;
use speakeasy_helpers::core::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    config.init_logging();

    if let Err(e) = run(cli, &config) {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli, config: &cli::CliConfig) -> Result<()> {
    let project_dir = std::env::current_dir().context("Cannot determine the current directory")?;
    cli.execute_in(&project_dir, config)
}
