//! Error types for `sumplog`.
//!
//! Store failures are split by phase (open, write, read) so the embedding
//! application can decide which ones are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for sumplog operations.
#[derive(Error, Debug)]
pub enum SumplogError {
    // === Store Errors ===
    /// The store could not be opened or its table could not be created.
    #[error("Failed to open event log at {location}: {source}")]
    Init {
        location: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Preparing or executing an insert failed.
    #[error("Failed to record event: {0}")]
    Write(#[source] rusqlite::Error),

    /// Preparing, executing or decoding a query failed.
    #[error("Failed to read events: {0}")]
    Read(#[source] rusqlite::Error),

    /// No database exists at the configured path.
    #[error("Event log not initialized: {} (run `sumplog init`)", .path.display())]
    NotInitialized { path: PathBuf },

    // === Input Errors ===
    /// A timestamp argument was neither Unix seconds nor RFC 3339.
    #[error("Invalid timestamp '{value}': expected Unix seconds or RFC 3339")]
    InvalidTimestamp { value: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SumplogError {
    #[must_use]
    pub fn init(location: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Init {
            location: location.into(),
            source,
        }
    }

    /// True for failures raised by the underlying store.
    #[must_use]
    pub const fn is_store_error(&self) -> bool {
        matches!(self, Self::Init { .. } | Self::Write(_) | Self::Read(_))
    }
}

/// Result type using `SumplogError`.
pub type Result<T> = std::result::Result<T, SumplogError>;
