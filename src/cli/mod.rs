//! Command-line interface for `sumplog`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{self, CliOverrides};
use crate::logging;

/// `sumplog` - action/result event log with a liveness probe.
#[derive(Parser, Debug)]
#[command(name = "sumplog")]
#[command(
    author,
    version,
    about = "Action/result event log with a liveness probe (SQLite)",
    long_about = None,
    after_help = "An event recorded within the last hour means the monitor is alive."
)]
pub struct Cli {
    /// Path of the event database (overrides config and SUMPLOG_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (default: ./sumplog.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the event log if it does not exist
    Init,

    /// Record an action and its result
    Save(SaveArgs),

    /// Check whether an event was recorded in the last hour
    Alive,

    /// List recorded events
    List(ListArgs),

    /// Check the database layout and integrity
    Doctor,

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// What was attempted (e.g. pump-check)
    pub action: String,

    /// How it turned out (e.g. ok, failed)
    pub result: String,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only events at or after this time (Unix seconds or RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub since: Option<String>,

    /// Only events at or before this time (Unix seconds or RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub until: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        db: cli.db.clone(),
        config: cli.config.clone(),
    };
    let config = config::load(&overrides)?;
    logging::init_logging(cli.verbose, cli.quiet, config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    // Config is resolved before the subscriber exists, so report it here.
    tracing::debug!(
        database = %config.database.display(),
        log_format = %config.log_format,
        "Resolved configuration"
    );

    let json = cli.json;
    match cli.command {
        Some(Commands::Init) => commands::init::execute(&config, json)?,
        Some(Commands::Save(args)) => commands::save::execute(&args, &config, json)?,
        Some(Commands::Alive) => commands::alive::execute(&config, json)?,
        Some(Commands::List(args)) => commands::list::execute(&args, &config, json)?,
        Some(Commands::Doctor) => commands::doctor::execute(&config, json)?,
        Some(Commands::Version(args)) => commands::version::execute(&args, json)?,
        Some(Commands::Completions(args)) => commands::completions::execute(&args),
        None => println!("sumplog - action/result event log. Use --help for usage."),
    }

    Ok(())
}
