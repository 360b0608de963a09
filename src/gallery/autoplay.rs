//! Recurring autoplay timer
//!
//! The timer runs as a tokio task and only ever sends ticks over a channel;
//! the owner applies them on its own event loop. Dropping the `Autoplay`
//! aborts the task, so a torn-down view never receives a late tick.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Default delay between automatic photo advances
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Ticks buffered while the UI is busy; extra ticks are dropped
const TICK_BUFFER: usize = 16;

pub struct Autoplay {
    period: Duration,
    handle: Option<JoinHandle<()>>,
    ticks: mpsc::Receiver<()>,
}

impl Autoplay {
    /// Arm the timer. The first tick fires one full `period` from now.
    pub fn start(period: Duration) -> Self {
        // A zero period would make tokio's interval panic
        let period = period.max(Duration::from_millis(1));
        let (tx, ticks) = mpsc::channel(TICK_BUFFER);

        let handle = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;
                match tx.try_send(()) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(())) => {
                        tracing::debug!("Autoplay tick dropped, UI is behind");
                    }
                    Err(mpsc::error::TrySendError::Closed(())) => break,
                }
            }
        });

        tracing::debug!("Autoplay armed ({}ms)", period.as_millis());
        Self {
            period,
            handle: Some(handle),
            ticks,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Handle on the timer task that outlives this `Autoplay`
    #[cfg(test)]
    pub(crate) fn task(&self) -> Option<tokio::task::AbortHandle> {
        self.handle.as_ref().map(JoinHandle::abort_handle)
    }

    /// Take every tick that has fired since the last call
    pub fn drain(&mut self) -> usize {
        let mut fired = 0;
        while self.ticks.try_recv().is_ok() {
            fired += 1;
        }
        fired
    }

    /// Cancel the timer. Ticks already queued are discarded.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Autoplay disarmed");
        }
        self.ticks.close();
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let mut autoplay = Autoplay::start(Duration::from_millis(DEFAULT_INTERVAL_MS));

        sleep(Duration::from_millis(4999)).await;
        assert_eq!(autoplay.drain(), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(autoplay.drain(), 1);

        sleep(Duration::from_millis(10_000)).await;
        assert_eq!(autoplay.drain(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer() {
        let mut autoplay = Autoplay::start(Duration::from_millis(100));
        sleep(Duration::from_millis(150)).await;
        autoplay.stop();

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(autoplay.drain(), 0);
        assert!(!autoplay.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_ends_timer_task() {
        // Long period: without the abort the task would sleep for a minute
        let autoplay = Autoplay::start(Duration::from_secs(60));
        let task = autoplay.task().unwrap();
        sleep(Duration::from_millis(1)).await;
        assert!(!task.is_finished());

        drop(autoplay);
        sleep(Duration::from_millis(1)).await;
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let autoplay = Autoplay::start(Duration::ZERO);
        assert_eq!(autoplay.period(), Duration::from_millis(1));
        assert!(autoplay.is_running());
    }
}
