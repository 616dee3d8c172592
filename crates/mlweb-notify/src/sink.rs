//! Rendering surfaces for toasts
//!
//! The center owns toast state; a sink only mirrors it. Sinks are called
//! while the center holds its lock and must not call back into the center.

use crate::toast::{Toast, ToastId};
use std::fmt::Debug;

/// Rendering surface for toasts
pub trait NotificationSink: Debug + Send + Sync {
    /// Attach a new toast
    fn show(&self, toast: &Toast);

    /// Start the exit animation of an attached toast
    fn exit(&self, id: ToastId);

    /// Detach a toast
    fn remove(&self, id: ToastId);
}

/// Sink that writes toasts to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn show(&self, toast: &Toast) {
        match toast.kind {
            crate::Kind::Error => tracing::warn!(id = %toast.id, "{}", toast.label()),
            _ => tracing::info!(id = %toast.id, "{}", toast.label()),
        }
    }

    fn exit(&self, id: ToastId) {
        tracing::trace!(%id, "toast exiting");
    }

    fn remove(&self, id: ToastId) {
        tracing::trace!(%id, "toast removed");
    }
}
