use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DEFAULT_COPY_RESET: Duration = Duration::from_millis(2000);

/// Transient "Copied!" indicator.
///
/// Each copy restarts the reset timer. The timer task is aborted when the
/// owner is dropped.
#[derive(Debug)]
pub struct CopyFeedback {
    /// 0 when idle, otherwise the epoch of the copy that set it
    state: Arc<AtomicU64>,
    epoch: u64,
    reset_after: Duration,
    timer: Option<JoinHandle<()>>,
}

impl CopyFeedback {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            state: Arc::new(AtomicU64::new(0)),
            epoch: 0,
            reset_after,
            timer: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.state.load(Ordering::SeqCst) != 0
    }

    /// Show the indicator and (re)start the reset timer
    pub fn trigger(&mut self) {
        self.cancel_timer();

        self.epoch += 1;
        let epoch = self.epoch;
        self.state.store(epoch, Ordering::SeqCst);

        let Ok(handle) = Handle::try_current() else {
            tracing::debug!("No async runtime, copy indicator will not auto-reset");
            return;
        };

        let state = Arc::clone(&self.state);
        let delay = self.reset_after;

        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // A newer copy owns the indicator if the epoch moved on
            let _ = state.compare_exchange(epoch, 0, Ordering::SeqCst, Ordering::SeqCst);
        }));
    }

    /// Hide the indicator immediately
    pub fn clear(&mut self) {
        self.cancel_timer();
        self.state.store(0, Ordering::SeqCst);
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_RESET)
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_indicator_resets_after_delay() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        assert!(!feedback.is_copied());

        feedback.trigger();
        assert!(feedback.is_copied());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(feedback.is_copied());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!feedback.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_copy_restarts_timer() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        feedback.trigger();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        feedback.trigger();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(feedback.is_copied(), "first timer must not clear the second copy");

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!feedback.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_timer() {
        let mut feedback = CopyFeedback::default();
        feedback.trigger();
        feedback.clear();
        assert!(!feedback.is_copied());
        assert!(feedback.timer.is_none());
    }

    #[test]
    fn test_trigger_without_runtime() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(10));
        feedback.trigger();
        assert!(feedback.is_copied());
        assert!(feedback.timer.is_none());
    }
}
