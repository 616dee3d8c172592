//! Error types for UI collaborators

/// UI collaborator errors
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Exclusive selection constructed without options
    #[error("selection needs at least one option")]
    EmptySelection,

    /// No filter button carries this filter
    #[error("unknown portfolio filter: {0}")]
    UnknownFilter(String),

    /// Language not offered by the switcher
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Preference could not be persisted
    #[error(transparent)]
    Storage(#[from] mlweb_core::StorageError),
}

/// Clipboard write failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// Permission denied by the user agent
    #[error("clipboard access denied")]
    Denied,

    /// No clipboard in this environment
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
