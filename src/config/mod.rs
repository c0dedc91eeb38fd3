//! Configuration management for `sumplog`.
//!
//! Settings are layered, lowest precedence first:
//! - Built-in defaults
//! - YAML file (`--config`, or `./sumplog.yaml` when present)
//! - Environment variables (`SUMPLOG_DB`, `SUMPLOG_LOG_FORMAT`)
//! - CLI overrides (`--db`)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SumplogError};
use crate::storage::{EventLog, IN_MEMORY};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sumplog.yaml";
/// Database used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "sumplog.db";

pub const ENV_DATABASE: &str = "SUMPLOG_DB";
pub const ENV_LOG_FORMAT: &str = "SUMPLOG_LOG_FORMAT";

/// Diagnostic log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = SumplogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SumplogError::Config(format!(
                "unknown log format '{other}' (expected text or json)"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the SQLite database (or `:memory:`).
    pub database: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            log_format: LogFormat::Text,
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Config {
    /// True if the database lives in memory rather than on disk.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.database.as_os_str() == IN_MEMORY
    }
}

/// Load configuration from every layer, reading the process environment.
///
/// # Errors
///
/// Returns an error if an explicit config file is missing, a file cannot
/// be parsed, or an environment value is invalid.
pub fn load(cli: &CliOverrides) -> Result<Config> {
    load_with_env(cli, |key| std::env::var(key).ok())
}

/// Load configuration with a caller-supplied environment lookup.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_env<F>(cli: &CliOverrides, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match cli.config.as_deref() {
        Some(path) => read_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_file(default_path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(db) = env(ENV_DATABASE).filter(|v| !v.trim().is_empty()) {
        config.database = PathBuf::from(db);
    }
    if let Some(format) = env(ENV_LOG_FORMAT).filter(|v| !v.trim().is_empty()) {
        config.log_format = format.parse()?;
    }
    if let Some(db) = &cli.db {
        config.database.clone_from(db);
    }

    Ok(config)
}

/// Parse a YAML config file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read or `Yaml` if it is malformed.
pub fn read_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(&contents)?)
}

/// Open the configured log, which must already exist on disk.
///
/// # Errors
///
/// Returns `NotInitialized` if the database file is missing, or the
/// store's error if it cannot be opened.
pub fn open_existing(config: &Config) -> Result<EventLog> {
    if !config.is_in_memory() && !config.database.exists() {
        return Err(SumplogError::NotInitialized {
            path: config.database.clone(),
        });
    }
    EventLog::open(&config.database)
}
