//! Notification center
//!
//! Single shared toast manager:
//! - `notify` supersedes whatever is on screen (last-write-wins, no queue)
//! - every toast dismisses itself after the configured delay
//! - dismissal runs an exit animation before detachment
//! - removal is idempotent; late timers find nothing and do nothing
//!
//! Timers are fire-and-forget tasks on the runtime captured at construction.
//! They are never cancelled; each one re-checks containment when it fires.

use crate::error::NotifyError;
use crate::kind::Kind;
use crate::sink::NotificationSink;
use crate::toast::{Toast, ToastId, ToastPhase};
use indexmap::IndexMap;
use mlweb_core::NotificationTimings;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Why a toast is leaving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// User pressed close
    Closed,
    /// Auto-dismiss timer fired
    Timeout,
}

#[derive(Debug)]
struct Attached {
    toast: Toast,
    phase: ToastPhase,
}

struct Inner {
    timings: NotificationTimings,
    sink: Arc<dyn NotificationSink>,
    runtime: Handle,
    attached: Mutex<IndexMap<ToastId, Attached>>,
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inner")
            .field("timings", &self.timings)
            .field("sink", &self.sink)
            .field("attached", &self.attached.lock().len())
            .finish_non_exhaustive()
    }
}

/// Shared toast manager
///
/// Cheap to clone; every clone drives the same set of toasts.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    /// Create a center on the current tokio runtime
    ///
    /// # Errors
    /// - `NotifyError::NoRuntime` when called outside a runtime
    pub fn new(
        timings: NotificationTimings,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;
        Ok(Self::with_handle(timings, sink, runtime))
    }

    /// Create a center that schedules its timers on `runtime`
    #[must_use]
    pub fn with_handle(
        timings: NotificationTimings,
        sink: Arc<dyn NotificationSink>,
        runtime: Handle,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                timings,
                sink,
                runtime,
                attached: Mutex::new(IndexMap::new()),
            }),
        }
    }

    /// Show a toast, replacing any toast currently attached
    pub fn notify(&self, message: impl Into<String>, kind: Kind) -> ToastId {
        let toast = Toast::new(message, kind);
        let id = toast.id;

        {
            let mut attached = self.inner.attached.lock();
            for (stale, _) in attached.drain(..) {
                self.inner.sink.remove(stale);
            }
            self.inner.sink.show(&toast);
            tracing::debug!(%id, kind = %kind, "toast shown");
            attached.insert(
                id,
                Attached {
                    toast,
                    phase: ToastPhase::Visible,
                },
            );
        }

        let inner = Arc::clone(&self.inner);
        let delay = self.inner.timings.auto_dismiss();
        self.inner.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            begin_exit(&inner, id, DismissReason::Timeout);
        });

        id
    }

    /// Show a success toast
    #[inline]
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Kind::Success)
    }

    /// Show an error toast
    #[inline]
    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Kind::Error)
    }

    /// Show a warning toast
    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Kind::Warning)
    }

    /// Show an info toast
    #[inline]
    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Kind::Info)
    }

    /// User pressed close on a toast
    ///
    /// Returns `false` when the toast is already leaving or gone.
    pub fn close(&self, id: ToastId) -> bool {
        begin_exit(&self.inner, id, DismissReason::Closed)
    }

    /// Detach every toast immediately, skipping exit animations
    pub fn clear(&self) {
        let mut attached = self.inner.attached.lock();
        for (id, _) in attached.drain(..) {
            self.inner.sink.remove(id);
        }
    }

    /// Containment check
    #[must_use]
    pub fn is_visible(&self, id: ToastId) -> bool {
        self.inner.attached.lock().contains_key(&id)
    }

    /// Phase of an attached toast
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.inner.attached.lock().get(&id).map(|a| a.phase)
    }

    /// Toasts still attached, oldest first
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.inner
            .attached
            .lock()
            .values()
            .map(|a| a.toast.clone())
            .collect()
    }

    /// Most recent attached toast
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.inner
            .attached
            .lock()
            .last()
            .map(|(_, a)| a.toast.clone())
    }

    /// Timings in use
    #[inline]
    #[must_use]
    pub fn timings(&self) -> NotificationTimings {
        self.inner.timings
    }
}

fn begin_exit(inner: &Arc<Inner>, id: ToastId, reason: DismissReason) -> bool {
    {
        let mut attached = inner.attached.lock();
        match attached.get_mut(&id) {
            Some(entry) if entry.phase == ToastPhase::Visible => {
                entry.phase = ToastPhase::Exiting;
                inner.sink.exit(id);
                tracing::debug!(%id, ?reason, "toast exiting");
            }
            _ => return false,
        }
    }

    let task_inner = Arc::clone(inner);
    let delay = inner.timings.exit_animation();
    inner.runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        detach(&task_inner, id);
    });
    true
}

fn detach(inner: &Inner, id: ToastId) {
    let mut attached = inner.attached.lock();
    if attached.shift_remove(&id).is_some() {
        inner.sink.remove(id);
        tracing::debug!(%id, "toast detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct CountingSink {
        shown: Mutex<Vec<ToastId>>,
        exits: Mutex<Vec<ToastId>>,
        removed: Mutex<Vec<ToastId>>,
    }

    impl NotificationSink for CountingSink {
        fn show(&self, toast: &Toast) {
            self.shown.lock().push(toast.id);
        }

        fn exit(&self, id: ToastId) {
            self.exits.lock().push(id);
        }

        fn remove(&self, id: ToastId) {
            self.removed.lock().push(id);
        }
    }

    fn center() -> (NotificationCenter, Arc<CountingSink>) {
        let sink = Arc::new(CountingSink::default());
        let center = NotificationCenter::new(NotificationTimings::default(), sink.clone()).unwrap();
        (center, sink)
    }

    #[test]
    fn new_outside_runtime_fails() {
        let sink = Arc::new(CountingSink::default());
        let result = NotificationCenter::new(NotificationTimings::default(), sink);
        assert!(matches!(result, Err(NotifyError::NoRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn toast_auto_dismisses() {
        let (center, sink) = center();
        let id = center.success("Gotowe");
        assert!(center.is_visible(id));

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(center.phase(id), Some(ToastPhase::Exiting));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!center.is_visible(id));
        assert_eq!(sink.removed.lock().as_slice(), &[id]);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_close_then_timeout_removes_once() {
        let (center, sink) = center();
        let id = center.info("Hej");

        assert!(center.close(id));
        assert!(!center.close(id));

        tokio::time::sleep(Duration::from_millis(6000)).await;
        assert!(!center.is_visible(id));
        assert_eq!(sink.exits.lock().len(), 1);
        assert_eq!(sink.removed.lock().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn notify_supersedes_previous() {
        let (center, sink) = center();
        let first = center.error("pierwszy");
        let second = center.success("drugi");

        assert!(!center.is_visible(first));
        assert_eq!(center.visible().len(), 1);
        assert_eq!(center.current().map(|t| t.id), Some(second));
        assert_eq!(sink.removed.lock().as_slice(), &[first]);
    }

    #[tokio::test]
    async fn clear_detaches_everything() {
        let (center, _sink) = center();
        center.warning("uwaga");
        center.clear();
        assert!(center.visible().is_empty());
        assert!(center.current().is_none());
    }
}
