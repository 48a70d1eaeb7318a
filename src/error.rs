//! Crate-level error type and `Result` alias.
//! Converts underlying I/O, GDAL and JSON errors, and provides semantic variants
//! for location validation, archive discovery and external tool failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No .tar.gz files found under {0}/.")]
    NoArchives(String),

    #[error("{0} is not a valid directory path")]
    InvalidDirectory(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Failed to run {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    CommandFailed { program: String, code: Option<i32> },

    #[error("Invalid tile grid {path:?}: {reason}")]
    InvalidGrid { path: PathBuf, reason: String },
}

impl Error {
    pub fn invalid_grid<P: Into<PathBuf>, S: std::fmt::Display>(path: P, reason: S) -> Self {
        Error::InvalidGrid {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
