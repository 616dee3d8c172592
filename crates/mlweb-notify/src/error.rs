//! Error types for the notification center

/// Notification center errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Constructed outside a tokio runtime, timers have nowhere to run
    #[error("notification center requires a tokio runtime")]
    NoRuntime,
}
