//! Site initialization errors

use mlweb_core::ConfigError;
use mlweb_ui::UiError;
use std::path::PathBuf;

/// Errors returned by `Site::init` and catalog loading
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Called outside a tokio runtime
    #[error("site must be initialized inside a tokio runtime")]
    NoRuntime,

    /// Widget could not be built
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Portfolio catalog unreadable
    #[error("failed to read portfolio catalog {path}")]
    CatalogRead {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Portfolio catalog is not valid JSON
    #[error("malformed portfolio catalog {path}")]
    CatalogFormat {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}
