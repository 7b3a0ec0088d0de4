//! Debounced search with explicit cancellation.
//!
//! A user-typed search should fire one request ~300ms after the last
//! keystroke, and a new keystroke must abort the superseded in-flight
//! work (both the debounce sleep and any request already running) so a
//! slow early response can never overwrite a newer one.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay between the last keystroke and the fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounces an async job, aborting the superseded generation on every
/// new trigger.
#[derive(Debug, Default)]
pub struct Debouncer {
    in_flight: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `job` to run after `delay`, cancelling whatever was
    /// scheduled before. The job typically performs a fetch and posts
    /// its result back over a channel.
    pub fn trigger<F>(&mut self, delay: Duration, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.in_flight = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;
        }));
    }

    /// Aborts the pending generation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn job_runs_after_the_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        let counter = fired.clone();
        debouncer.trigger(Duration::from_millis(300), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_trigger_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        for _ in 0..5 {
            let counter = fired.clone();
            debouncer.trigger(Duration::from_millis(300), async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        // Only the last generation survives its full debounce window.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_pending_job() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new();

        let counter = fired.clone();
        debouncer.trigger(Duration::from_millis(300), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
