//! Debounce module - collapses bursts of calls into one deferred execution.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounces invocations of a callback: each [`call`](Debouncer::call)
/// supersedes any pending one, so within a burst only the last call's
/// argument reaches the callback, `delay` after the burst ends.
///
/// Each instance owns at most one pending timer task. Dropping the
/// debouncer cancels whatever is still pending.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wraps `callback` so that invocations are deferred by `delay` and
    /// bursts collapse into the last call.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Debouncer {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedules the callback with `arg` after the configured delay,
    /// cancelling any previously scheduled execution first. Last call
    /// wins within a window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&mut self, arg: T) {
        self.cancel();
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(arg);
        }));
    }

    /// Cancels the pending execution, if any, without invoking the
    /// callback.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an execution is currently scheduled and not yet run.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const DELAY: Duration = Duration::from_millis(100);

    /// Debouncer recording every delivered argument, plus the record.
    fn recording_debouncer() -> (Debouncer<i32>, Arc<Mutex<Vec<i32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::new(DELAY, move |value: i32| {
            sink.lock().unwrap().push(value);
        });
        (debouncer, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_call() {
        let (mut debouncer, seen) = recording_debouncer();

        for value in [1, 2, 3] {
            debouncer.call(value);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        tokio::time::sleep(DELAY * 2).await;

        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_each_fire() {
        let (mut debouncer, seen) = recording_debouncer();

        for value in [1, 2] {
            debouncer.call(value);
            tokio::time::sleep(DELAY * 2).await;
        }

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_pending_call() {
        let (mut debouncer, seen) = recording_debouncer();

        debouncer.call(1);
        debouncer.cancel();
        tokio::time::sleep(DELAY * 2).await;

        assert!(seen.lock().unwrap().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_call() {
        let (mut debouncer, seen) = recording_debouncer();

        debouncer.call(1);
        drop(debouncer);
        tokio::time::sleep(DELAY * 2).await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_pending_tracks_lifecycle() {
        let (mut debouncer, _seen) = recording_debouncer();
        assert!(!debouncer.is_pending());

        debouncer.call(1);
        assert!(debouncer.is_pending());

        tokio::time::sleep(DELAY * 2).await;
        assert!(!debouncer.is_pending());
    }
}
