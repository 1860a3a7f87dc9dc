//! Interval-driven carousel advancement

use super::Steppable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Autoplay flags for one carousel.
///
/// `enabled` is the carousel's configuration; `suspended` flips on pointer
/// enter/leave. A tick only advances when enabled and not suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autoplay {
    enabled: bool,
    suspended: bool,
    interval: Duration,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            enabled: true,
            suspended: false,
            interval,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            suspended: false,
            interval: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.interval.is_zero()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn should_advance(&self) -> bool {
        self.is_enabled() && !self.suspended
    }

    /// Pointer entered the carousel
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Pointer left the carousel
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Apply one timer tick to `target`. Returns the new index when it moved.
    pub fn tick<S: Steppable>(&self, target: &mut S) -> Option<usize> {
        if !self.should_advance() {
            return None;
        }
        Some(target.step_forward())
    }
}

/// Recurring tokio task that fires `on_tick` every interval.
///
/// The task lives exactly as long as this guard: dropping it (e.g. when the
/// owning view is torn down) aborts the task.
#[cfg(feature = "runtime")]
#[derive(Debug)]
pub struct AutoplayTimer {
    handle: tokio::task::JoinHandle<()>,
}

#[cfg(feature = "runtime")]
impl AutoplayTimer {
    /// Start ticking. The first tick fires one full interval after the call.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "autoplay timer started");
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

#[cfg(feature = "runtime")]
impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("autoplay timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CyclicStepper, OverflowPolicy, WindowedSlider};

    #[test]
    fn test_tick_advances_when_running() {
        let autoplay = Autoplay::new(Duration::from_millis(5000));
        let mut stepper = CyclicStepper::new(3);
        assert_eq!(autoplay.tick(&mut stepper), Some(1));
        assert_eq!(autoplay.tick(&mut stepper), Some(2));
        assert_eq!(autoplay.tick(&mut stepper), Some(0));
    }

    #[test]
    fn test_tick_skipped_while_suspended() {
        let mut autoplay = Autoplay::new(Duration::from_millis(6000));
        let mut slider = WindowedSlider::new(8, 4, OverflowPolicy::Wrap);
        autoplay.suspend();
        assert_eq!(autoplay.tick(&mut slider), None);
        assert_eq!(slider.index(), 0);
        autoplay.resume();
        assert_eq!(autoplay.tick(&mut slider), Some(1));
    }

    #[test]
    fn test_disabled_never_advances() {
        let autoplay = Autoplay::disabled();
        let mut stepper = CyclicStepper::new(4);
        assert!(!autoplay.is_enabled());
        assert_eq!(autoplay.tick(&mut stepper), None);
    }

    #[cfg(feature = "runtime")]
    mod timer {
        use super::*;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::{Arc, Mutex};

        #[tokio::test(start_paused = true)]
        async fn test_timer_ticks_until_dropped() {
            let stepper = Arc::new(Mutex::new(CyclicStepper::new(5)));
            let shared = Arc::clone(&stepper);
            let timer = AutoplayTimer::spawn(Duration::from_millis(5000), move || {
                shared.lock().unwrap().next();
            });

            tokio::time::sleep(Duration::from_millis(10_500)).await;
            assert_eq!(stepper.lock().unwrap().index(), 2);

            timer.cancel();
            tokio::time::sleep(Duration::from_millis(20_000)).await;
            assert_eq!(stepper.lock().unwrap().index(), 2);
        }

        #[tokio::test(start_paused = true)]
        async fn test_timer_respects_suspension() {
            let stepper = Arc::new(Mutex::new(CyclicStepper::new(5)));
            let hovering = Arc::new(AtomicBool::new(true));
            let (shared, hover) = (Arc::clone(&stepper), Arc::clone(&hovering));
            let _timer = AutoplayTimer::spawn(Duration::from_millis(5000), move || {
                let mut autoplay = Autoplay::new(Duration::from_millis(5000));
                if hover.load(Ordering::SeqCst) {
                    autoplay.suspend();
                }
                autoplay.tick(&mut *shared.lock().unwrap());
            });

            tokio::time::sleep(Duration::from_millis(5_500)).await;
            assert_eq!(stepper.lock().unwrap().index(), 0);

            hovering.store(false, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5_000)).await;
            assert_eq!(stepper.lock().unwrap().index(), 1);
        }
    }
}
