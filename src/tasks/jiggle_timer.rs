//! Repeating jiggle timer and the controller that owns it

use std::time::Duration;
use chrono::{DateTime, Utc};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::state::TimerState;

/// The single active repeating timer
#[derive(Debug)]
struct TimerHandle {
    interval: Duration,
    started_at: DateTime<Utc>,
    task: JoinHandle<()>,
}

/// Owns at most one repeating timer at a time
#[derive(Debug, Default)]
pub struct TimerController {
    timer: Option<TimerHandle>,
}

impl TimerController {
    pub fn new() -> Self {
        Self { timer: None }
    }

    /// Start firing `on_fire` every `interval`, replacing any running timer.
    ///
    /// The first fire happens one full interval from now. Must be called
    /// from within a tokio runtime.
    pub fn start<F>(&mut self, interval: Duration, on_fire: F) -> Result<(), String>
    where
        F: FnMut() + Send + 'static,
    {
        if interval.is_zero() {
            return Err("Timer interval must be positive".to_string());
        }

        if self.stop() {
            debug!("Replaced previously running timer");
        }

        info!("Starting event loop with fire every {} seconds", interval.as_secs_f64());
        self.timer = Some(TimerHandle {
            interval,
            started_at: Utc::now(),
            task: tokio::spawn(jiggle_timer_task(interval, on_fire)),
        });
        Ok(())
    }

    /// Cancel the active timer. Returns false if there was none.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                info!("Stopping event loop");
                timer.task.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> TimerState {
        match &self.timer {
            Some(timer) => TimerState::active(timer.interval.as_secs_f64(), timer.started_at),
            None => TimerState::inactive(),
        }
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.task.abort();
        }
    }
}

/// Background task that invokes `on_fire` once per interval until aborted
pub async fn jiggle_timer_task<F>(period: Duration, mut on_fire: F)
where
    F: FnMut() + Send + 'static,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    // A sleeping machine wakes up to one fire, not a burst of them
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        debug!("Jiggle timer fired");
        on_fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tokio::time::sleep;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_interval_and_not_immediately() {
        let (count, on_fire) = counter();
        let mut controller = TimerController::new();
        controller.start(Duration::from_secs(30), on_fire).unwrap();

        sleep(Duration::from_secs(29)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        sleep(Duration::from_secs(62)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_further_fires() {
        let (count, on_fire) = counter();
        let mut controller = TimerController::new();
        controller.start(Duration::from_secs(30), on_fire).unwrap();

        sleep(Duration::from_secs(61)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(controller.stop());
        assert!(!controller.is_running());
        sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn stop_without_timer_is_a_noop() {
        let mut controller = TimerController::new();
        assert!(!controller.stop());
        assert!(!controller.stop());
        assert!(!controller.state().is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_replaces_the_old_timer() {
        let (count, on_fire) = counter();
        let mut controller = TimerController::new();
        controller.start(Duration::from_secs(30), on_fire).unwrap();

        sleep(Duration::from_secs(10)).await;
        let (second, on_fire) = counter();
        controller.start(Duration::from_secs(30), on_fire).unwrap();

        // New timer fires at 40s and 70s; the old one would have added 30s and 60s
        sleep(Duration::from_secs(65)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_interval_is_rejected() {
        let (_, on_fire) = counter();
        let mut controller = TimerController::new();
        assert!(controller.start(Duration::ZERO, on_fire).is_err());
        assert!(!controller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn state_reports_interval_while_running() {
        let (_, on_fire) = counter();
        let mut controller = TimerController::new();
        controller.start(Duration::from_secs(90), on_fire).unwrap();

        let state = controller.state();
        assert!(state.is_active());
        assert_eq!(state.interval_seconds(), Some(90.0));

        controller.stop();
        assert_eq!(controller.state().interval_seconds(), None);
    }
}
