//! Debounce utility
//!
//! One reusable timer for search inputs: each call resets the delay,
//! and the wrapped work runs only after the delay passes with no newer
//! call. Replaces the per-page manual timer bookkeeping the list
//! screens otherwise duplicate.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounces an async action behind a fixed delay
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the delay, aborting any earlier
    /// scheduled action that has not fired yet.
    pub fn call<F, Fut>(&mut self, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action().await;
        }));
    }

    /// Drop the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
