//! Guess counter and exceeded flag shared by every strategy.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Per-run shared state.
///
/// The parallel strategy hands one `Arc<SharedProgress>` to every worker; the
/// single-threaded strategies use the same type so the coordinator can reset
/// and read it uniformly.
#[derive(Debug, Default)]
pub struct SharedProgress {
    guesses: AtomicU64,
    exceeded: AtomicBool,
}

impl SharedProgress {
    /// Count one guess. Returns the total including this one.
    pub fn record_guess(&self) -> u64 {
        self.guesses.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn guesses(&self) -> u64 {
        self.guesses.load(Ordering::Relaxed)
    }

    /// Flip the exceeded flag. Returns true only for the caller that tripped it.
    pub fn mark_exceeded(&self) -> bool {
        self.exceeded
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_exceeded(&self) -> bool {
        self.exceeded.load(Ordering::Acquire)
    }

    /// Zero the counter and clear the flag for a new run.
    pub fn reset(&self) {
        self.guesses.store(0, Ordering::Relaxed);
        self.exceeded.store(false, Ordering::Release);
    }
}
