//! docsplice CLI
//!
//! Regenerates documentation listings and constant tables inside source
//! files.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::Status;
use config::SpliceConfig;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(Status::Clean) => {}
        Ok(Status::Drift) => std::process::exit(2),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Status> {
    let cli = Cli::parse();

    // Warnings (e.g. a region with no separator) are always shown; stdout
    // may carry generated output, so logs go to stderr.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    if let Commands::Docs(args) = &cli.command {
        commands::docs::check_patterns(args)?;
    }

    let cwd = std::env::current_dir()?;
    let config = SpliceConfig::load(cli.config.as_deref(), &cwd)?;

    execute_command(cli.command, &config)
}

fn execute_command(cmd: Commands, config: &SpliceConfig) -> Result<Status> {
    match cmd {
        Commands::Docs(args) => commands::run_docs(&args, config),
        Commands::Consts(args) => commands::run_consts(&args, config).map(|()| Status::Clean),
    }
}
