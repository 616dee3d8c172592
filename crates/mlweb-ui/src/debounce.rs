//! Trailing-edge debounce
//!
//! Each call supersedes the previous pending one; only the last call within
//! the window runs. Superseded timers still fire but find a newer generation
//! and do nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Debounced action scheduler
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
    runtime: Handle,
}

impl Debouncer {
    /// Create with a quiet window
    #[must_use]
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            runtime,
        }
    }

    /// Schedule `action`, superseding any pending one
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == ticket {
                action();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[tokio::test(start_paused = true)]
    async fn only_last_call_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(300), Handle::current());
        let seen = Arc::new(Mutex::new(Vec::new()));

        for term in ["k", "ka", "kan"] {
            let seen = Arc::clone(&seen);
            debouncer.call(move || seen.lock().push(term));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(seen.lock().as_slice(), &["kan"]);
    }
}
