// Copyright 2025 List Perf Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for the list performance comparison.
//!
//! Running the binary without arguments is the same as `run`: the full
//! scenario set with the default sizes, printed as a text table.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use clap::{Parser, Subcommand};
use list_perf_benchmarks::{BenchConfig, OutputFormat, Scenario};
use tracing_subscriber::EnvFilter;

/// ArrayList vs LinkedList performance comparison.
#[derive(Parser, Debug)]
#[command(name = "list-perf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (defaults to `run`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run every scenario against both variants and print the report.
    Run {
        /// Output format: text, markdown or json.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Log per-scenario timings while running.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the configuration and scenario set without running anything.
    Status {
        /// List every scenario with its size.
        #[arg(short, long)]
        detailed: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the report cannot be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli.command.unwrap_or_default())
}

/// Execute one command, writing to stdout.
pub fn execute(command: Commands) -> anyhow::Result<()> {
    let config = BenchConfig::default();

    match command {
        Commands::Run { format, verbose } => {
            init_tracing(verbose);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let report = list_perf_benchmarks::run_and_render(config, format, &mut out)?;

            tracing::debug!(records = report.results.len(), %format, "Report written");
            Ok(())
        }
        Commands::Status { detailed } => {
            println!("List performance comparison");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Warmup iterations: {}", config.warmup_iterations);
            println!("Test iterations: {}", config.test_iterations);

            if detailed {
                println!("\nScenarios:");
                for scenario in Scenario::ALL {
                    println!("  - {:<16} {}", scenario.name(), scenario.size(&config));
                }
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_text_run() {
        let cli = Cli::try_parse_from(["list-perf"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(
            cli.command.unwrap_or_default(),
            Commands::Run {
                format: OutputFormat::Text,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_run_with_format() {
        let cli = Cli::try_parse_from(["list-perf", "run", "--format", "json", "-v"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                format: OutputFormat::Json,
                verbose: true,
            })
        );
    }

    #[test]
    fn test_format_ignores_environment() {
        std::env::set_var("LIST_PERF_FORMAT", "json");
        let cli = Cli::try_parse_from(["list-perf", "run"]).unwrap();
        std::env::remove_var("LIST_PERF_FORMAT");

        assert_eq!(
            cli.command,
            Some(Commands::Run {
                format: OutputFormat::Text,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["list-perf", "run", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_status_command() {
        let cli = Cli::try_parse_from(["list-perf", "status", "--detailed"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Status { detailed: true }));
        execute(Commands::Status { detailed: true }).unwrap();
    }
}
