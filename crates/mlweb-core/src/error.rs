//! Error types shared across MLWeb crates
//!
//! Environment failures (storage unavailable, quota exceeded) and
//! configuration failures. Neither is fatal to the UI: callers degrade
//! storage errors to an error notification.

use std::path::PathBuf;

/// Key/value storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backing store cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Write rejected by the backing store
    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Stored value could not be decoded
    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying I/O failure
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Check if the store itself is missing (as opposed to a bad value)
    #[inline]
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Io(_))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML did not parse
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed but semantically wrong
    #[error("invalid config value: {0}")]
    Invalid(String),
}
