//! Command-line interface for speakeasy-helpers.
//!
//! A collection of helper utilities for working with Speakeasy generated API
//! clients. Each subcommand lives in its own module with its own argument
//! structure and execution logic.
//!
//! # Available Commands
//!
//! - `reset-tests` - Delete generated test entries so they are regenerated
//!
//! # Global Options
//!
//! - `--verbose` - Show debug diagnostics on stderr
//! - `--quiet` - Suppress progress output; only errors are printed
//!
//! # Example
//!
//! ```bash
//! speakeasy-helpers reset-tests --operation-id activity --operation-id feedback
//! speakeasy-helpers --verbose reset-tests --operation-id activity
//! ```



pub use reset_tests::ResetTestsCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Runtime configuration for one CLI invocation.
///
/// Built from the parsed flags by [`Cli::build_config`] and passed explicitly
/// to the command, so running several commands in one process (as the tests
/// do) never shares state between them.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for diagnostics on stderr.
    ///
    /// `None` disables the subscriber entirely.
    pub log_level: Option<String>,

    /// Suppress progress and summary lines on stdout.
    pub quiet: bool,
}

impl CliConfig {
    /// Install the global tracing subscriber for this configuration.
    ///
    /// Should be called once, from `main`. Diagnostics go to stderr so stdout
    /// only ever carries progress lines.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Version string with the build metadata set by `build.rs`.
///
/// Packagers can override the commit and date through the
/// `SPEAKEASY_HELPERS_COMMIT` and `SPEAKEASY_HELPERS_BUILD_DATE` environment
/// variables at build time.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit: ",
    env!("SPEAKEASY_HELPERS_COMMIT"),
    ", built: ",
    env!("SPEAKEASY_HELPERS_BUILD_DATE"),
    ")"
);

/// Main CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "speakeasy-helpers",
    about = "A collection of helper utilities for working with Speakeasy generated API clients",
    version = VERSION,
    long_about = "speakeasy-helpers is a CLI tool that provides a set of utilities to help you \
                  work more effectively with Speakeasy generated API clients."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reset test entries for specified operation IDs.
    ///
    /// Delete test entries from both gen.lock and test.arazzo.yaml files for
    /// the specified operation IDs. This allows a subsequent 'speakeasy run'
    /// to regenerate the tests (e.g. if you have new fields or requirements
    /// in your upstream OpenAPI spec).
    ResetTests(ResetTestsCommand),
}

impl Cli {
    /// Build a [`CliConfig`] from the parsed arguments.
    ///
    /// - `--verbose`: `debug` diagnostics
    /// - `--quiet`: no diagnostics and no progress lines
    /// - otherwise: `info`
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            quiet: self.quiet,
        }
    }

    /// Run the selected command against the project in `project_dir`.
    pub fn execute_in(self, project_dir: &Path, config: &CliConfig) -> Result<()> {
        match self.command {
            Commands::ResetTests(cmd) => cmd.execute_in(project_dir, config),
        }
    }
}
