// crates/schoolstatus-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a generator run.
///
/// There is no recovery path: the first error ends the run, and any State
/// files already written stay on disk.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be opened.
    #[error("Roster not found: {0}")]
    NotFound(String),

    /// A required column is absent from the roster header.
    #[error("Missing required column '{0}' in roster header")]
    MissingColumn(String),

    /// Malformed CSV content (bad quoting, wrong field count, invalid UTF-8).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Creating a State directory or writing its template failed.
    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// A State code that cannot be used as a single directory name.
    #[error("Invalid State code '{0}': must be a single directory name")]
    InvalidStateCode(String),

    #[error("Invalid log level '{0}' (expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
