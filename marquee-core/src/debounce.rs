//! Cancellable delayed trigger.
//!
//! Each [`Debouncer::call`] replaces whatever trigger is still waiting out its
//! quiet interval. Once the interval elapses the scheduled work is handed to
//! its own task, so a later call can cancel a pending trigger but never a
//! fetch that has already started.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Quiet interval before a search fires.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Clones share the pending trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Debouncer waiting `interval` after the last call.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Configured quiet interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `work` to run after the quiet interval, cancelling any
    /// trigger that has not fired yet.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let interval = self.interval;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            // Detach: aborting the timer from here on has no effect on `work`.
            tokio::spawn(work);
        });

        if let Some(previous) = self.pending.lock().replace(timer) {
            previous.abort();
        }
    }

    /// Drop the pending trigger, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Whether a trigger is still waiting out its interval.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
