//! Whole-value search counting up from zero
//!
//! Only meaningful for targets that form an integer literal. For anything
//! else no candidate can ever match and the search runs until the deadline.

#![allow(dead_code)]

use crate::search::bounds::SearchBounds;
use crate::search::config::Strategy;
use crate::search::deadline::Deadline;
use crate::search::progress::SharedProgress;
use crate::search::result::{RunOutcome, SearchStatistics};
use crate::search::target::Target;
use crate::search::SearchAlgorithm;
use std::sync::Arc;
use tracing::{debug, warn};

/// Single-threaded whole-value-ascending search
pub struct AscendingSearch {
    progress: Arc<SharedProgress>,
    statistics: SearchStatistics,
}

impl AscendingSearch {
    pub fn new() -> Self {
        Self::with_progress(Arc::new(SharedProgress::default()))
    }

    pub fn with_progress(progress: Arc<SharedProgress>) -> Self {
        Self {
            progress,
            statistics: SearchStatistics::new(Strategy::Ascending),
        }
    }

    /// Count from zero until `wanted` is hit or the deadline fires.
    fn count_up(&self, wanted: Option<u64>, deadline: &Deadline) -> Option<u64> {
        deadline.start();
        for candidate in 0..=u64::MAX {
            self.progress.record_guess();
            let matched = wanted == Some(candidate);

            if deadline.is_exceeded() {
                self.progress.mark_exceeded();
                return None;
            }
            if matched {
                return Some(candidate);
            }
        }
        None
    }
}

impl Default for AscendingSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Decimal digits of `value`, left-padded with zeros to `width` positions.
fn render_digits(value: u64, width: usize) -> Vec<Option<u32>> {
    format!("{:0width$}", value, width = width)
        .chars()
        .map(|c| Some(u32::from(c)))
        .collect()
}

impl SearchAlgorithm for AscendingSearch {
    fn search(&mut self, target: &Target, _bounds: &SearchBounds, deadline: &Deadline) -> RunOutcome {
        let wanted = target.as_integer();
        if wanted.is_none() {
            warn!(password = %target, "target is not an integer literal, no candidate can match");
        }

        let found = match self.count_up(wanted, deadline) {
            Some(value) => render_digits(value, target.len()),
            None => vec![None; target.len()],
        };
        deadline.stop();
        debug!(
            guesses = self.progress.guesses(),
            exceeded = self.progress.is_exceeded(),
            "ascending search finished"
        );

        let outcome = RunOutcome {
            strategy: Strategy::Ascending,
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
        self.statistics = SearchStatistics::new(Strategy::Ascending);
    }
}
