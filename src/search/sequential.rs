//! Position-by-position exhaustive search
//!
//! Positions are solved left to right. For each one the candidates are tried
//! in ascending order from `bounds.min()` to `bounds.max()`, so the number of
//! guesses for a solved run is fully determined by the target:
//!
//! ```text
//! guesses = sum over positions of (target[i] - min + 1)
//! ```
//!
//! The deadline is checked after every comparison. A match is only recorded
//! if the deadline has not fired, so an exceeded run never carries a complete
//! reconstruction.

#![allow(dead_code)]

use crate::search::bounds::SearchBounds;
use crate::search::config::Strategy;
use crate::search::deadline::Deadline;
use crate::search::progress::SharedProgress;
use crate::search::result::{RunOutcome, SearchStatistics};
use crate::search::target::Target;
use crate::search::SearchAlgorithm;
use std::sync::Arc;
use tracing::{debug, trace};

/// Single-threaded sequential-positional search
pub struct SequentialSearch {
    progress: Arc<SharedProgress>,
    statistics: SearchStatistics,
}

impl SequentialSearch {
    pub fn new() -> Self {
        Self::with_progress(Arc::new(SharedProgress::default()))
    }

    /// Count guesses into a counter owned by the caller.
    pub fn with_progress(progress: Arc<SharedProgress>) -> Self {
        Self {
            progress,
            statistics: SearchStatistics::new(Strategy::Sequential),
        }
    }
}

impl Default for SequentialSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `bounds` for `symbol`, stopping early if the deadline fires.
///
/// Returns the matched value, or `None` if the deadline fired first or the
/// symbol lies outside the bounds.
pub(crate) fn scan_position(
    symbol: u32,
    bounds: &SearchBounds,
    deadline: &Deadline,
    progress: &SharedProgress,
) -> Option<u32> {
    deadline.start();
    for candidate in bounds.candidates() {
        progress.record_guess();
        let matched = candidate == symbol;

        if deadline.is_exceeded() {
            progress.mark_exceeded();
            return None;
        }
        if matched {
            return Some(candidate);
        }
    }
    None
}

impl SearchAlgorithm for SequentialSearch {
    fn search(&mut self, target: &Target, bounds: &SearchBounds, deadline: &Deadline) -> RunOutcome {
        let mut found = vec![None; target.len()];

        for (position, slot) in found.iter_mut().enumerate() {
            *slot = scan_position(target.symbol(position), bounds, deadline, &self.progress);

            if self.progress.is_exceeded() {
                debug!(
                    position,
                    guesses = self.progress.guesses(),
                    "deadline exceeded, abandoning remaining positions"
                );
                break;
            }
            trace!(position, value = ?slot, "position scanned");
        }
        deadline.stop();

        let outcome = RunOutcome {
            strategy: Strategy::Sequential,
            found,
            guess_count: self.progress.guesses(),
            elapsed: deadline.elapsed(),
            exceeded: self.progress.is_exceeded(),
        };
        self.statistics.record_outcome(&outcome);
        outcome
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.progress.reset();
        self.statistics = SearchStatistics::new(Strategy::Sequential);
    }
}
