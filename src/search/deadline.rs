//! Wall-clock budget for a single run
//!
//! The clock starts on the first guess rather than on construction, so setup
//! work (affinity, thread spawning) is not billed against the budget. Every
//! method takes `&self` and the deadline is `Sync`, which lets per-position
//! workers share one instance: whichever worker guesses first starts it.

#![allow(dead_code)]

use std::sync::OnceLock;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Deadline {
    limit: Duration,
    started: OnceLock<Instant>,
    stopped: OnceLock<Instant>,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started: OnceLock::new(),
            stopped: OnceLock::new(),
        }
    }

    pub fn from_millis(limit_ms: u64) -> Self {
        Self::new(Duration::from_millis(limit_ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start the clock if it is not already running. Idempotent.
    pub fn start(&self) -> Instant {
        *self.started.get_or_init(Instant::now)
    }

    pub fn is_started(&self) -> bool {
        self.started.get().is_some()
    }

    /// Freeze the elapsed time. Has no effect before `start` or after the first call.
    pub fn stop(&self) {
        if self.is_started() {
            let _ = self.stopped.set(Instant::now());
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get().is_some()
    }

    /// Time since the first guess, or zero if nothing has been guessed yet.
    pub fn elapsed(&self) -> Duration {
        match self.started.get() {
            Some(started) => {
                let end = self.stopped.get().copied().unwrap_or_else(Instant::now);
                end.saturating_duration_since(*started)
            }
            None => Duration::ZERO,
        }
    }

    /// True once the elapsed time reaches the limit.
    pub fn is_exceeded(&self) -> bool {
        self.elapsed() >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_waits_for_first_guess() {
        let deadline = Deadline::from_millis(50);
        thread::sleep(Duration::from_millis(60));

        assert!(!deadline.is_started());
        assert_eq!(deadline.elapsed(), Duration::ZERO);
        assert!(!deadline.is_exceeded());

        deadline.start();
        assert!(deadline.is_started());
        assert!(!deadline.is_exceeded());
    }

    #[test]
    fn test_zero_limit_is_exceeded_immediately() {
        let deadline = Deadline::from_millis(0);
        deadline.start();
        assert!(deadline.is_exceeded());
    }

    #[test]
    fn test_start_is_idempotent() {
        let deadline = Deadline::from_millis(1000);
        let first = deadline.start();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(deadline.start(), first);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let deadline = Deadline::from_millis(1000);
        deadline.start();
        thread::sleep(Duration::from_millis(5));
        deadline.stop();

        let frozen = deadline.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(deadline.elapsed(), frozen);
        assert!(frozen >= Duration::from_millis(5));
    }

    #[test]
    fn test_stop_before_start_is_ignored() {
        let deadline = Deadline::from_millis(1000);
        deadline.stop();
        assert!(!deadline.is_stopped());
    }

    #[test]
    fn test_limit_trips_after_sleep() {
        let deadline = Deadline::from_millis(10);
        deadline.start();
        thread::sleep(Duration::from_millis(20));
        assert!(deadline.is_exceeded());
    }
}
