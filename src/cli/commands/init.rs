//! Init command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::format::InitReport;
use crate::storage::EventLog;
use std::fs;

/// Execute the init command.
///
/// Creates the database (and its parent directory) if needed. Running it
/// against an existing log leaves the recorded events untouched.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    if !config.is_in_memory() {
        if let Some(parent) = config.database.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
    }

    let log = EventLog::open(&config.database)?;
    let report = InitReport {
        location: log.location().to_string(),
        events: log.count()?,
    };
    tracing::info!(location = %report.location, events = report.events, "Initialized event log");

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "Initialized event log at {} ({} event(s))",
            report.location, report.events
        );
    }
    Ok(())
}
