//! Save command implementation.

use crate::cli::SaveArgs;
use crate::config::{self, Config};
use crate::error::Result;
use crate::format::SavedEvent;

/// Execute the save command.
///
/// # Errors
///
/// Returns an error if the log is not initialized or the insert fails.
pub fn execute(args: &SaveArgs, config: &Config, json: bool) -> Result<()> {
    let log = config::open_existing(config)?;
    let id = log.save_log(&args.action, &args.result)?;

    if json {
        println!("{}", serde_json::to_string(&SavedEvent { id })?);
    } else {
        println!("Recorded event #{id}");
    }
    Ok(())
}
