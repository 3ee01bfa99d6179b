//! Run outcome and search statistics

#![allow(dead_code)]

use crate::search::config::Strategy;
use std::time::Duration;

/// Placeholder rendered for positions the run never solved.
pub const UNSOLVED_MARKER: char = '_';

/// Terminal result of one search run
///
/// `found` holds one slot per target position. A slot stays `None` when the
/// deadline fired before that position was matched, so an unsolved slot is
/// never confused with a real match on the lowest candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Strategy that produced this outcome
    pub strategy: Strategy,
    /// Recovered symbol per position
    pub found: Vec<Option<u32>>,
    /// Total guesses made, including the one that tripped the deadline
    pub guess_count: u64,
    /// Time from the first guess to the end of the search
    pub elapsed: Duration,
    /// Whether the deadline fired before the target was reconstructed
    pub exceeded: bool,
}

impl RunOutcome {
    /// True when every slot is populated and the deadline never fired.
    pub fn is_solved(&self) -> bool {
        !self.exceeded && self.found.iter().all(Option::is_some)
    }

    pub fn positions_solved(&self) -> usize {
        self.found.iter().filter(|slot| slot.is_some()).count()
    }

    /// The recovered password, if every position was solved.
    pub fn found_text(&self) -> Option<String> {
        self.found
            .iter()
            .map(|slot| slot.and_then(char::from_u32))
            .collect()
    }

    /// Recovered positions with [`UNSOLVED_MARKER`] in the gaps.
    pub fn partial_text(&self) -> String {
        self.found
            .iter()
            .map(|slot| slot.and_then(char::from_u32).unwrap_or(UNSOLVED_MARKER))
            .collect()
    }

    /// Elapsed monotonic clock ticks (nanoseconds).
    pub fn elapsed_ticks(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found_text().filter(|_| !self.exceeded) {
            Some(password) => {
                writeln!(f, "Found Password is {}", password)?;
                write!(
                    f,
                    "Solved in {} guesses, {} ticks, and {} seconds.",
                    self.guess_count,
                    self.elapsed_ticks(),
                    self.elapsed_seconds()
                )
            }
            None => {
                writeln!(f, "Time exceeded. Abort.")?;
                write!(
                    f,
                    "Recovered {} of {} positions ({}) in {} guesses, {} ticks, and {} seconds.",
                    self.positions_solved(),
                    self.found.len(),
                    self.partial_text(),
                    self.guess_count,
                    self.elapsed_ticks(),
                    self.elapsed_seconds()
                )
            }
        }
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Strategy used for the search
    pub strategy: Strategy,
    /// Time spent searching
    pub elapsed_time: Duration,
    /// Number of guesses made
    pub guesses: u64,
    /// Positions recovered before the search ended
    pub positions_solved: usize,
    /// Worker threads spawned (parallel strategy only)
    pub workers_spawned: usize,
    /// Whether the deadline fired
    pub exceeded: bool,
}

impl SearchStatistics {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Take the counters from a finished outcome.
    pub fn record_outcome(&mut self, outcome: &RunOutcome) {
        self.elapsed_time = outcome.elapsed;
        self.guesses = outcome.guess_count;
        self.positions_solved = outcome.positions_solved();
        self.exceeded = outcome.exceeded;
    }

    /// Guesses per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.guesses as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Strategy: {}\n", self.strategy));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Guesses: {}\n", self.guesses));
        s.push_str(&format!("Throughput: {:.0} guesses/sec\n", self.throughput()));
        s.push_str(&format!("Positions solved: {}\n", self.positions_solved));
        if self.workers_spawned > 0 {
            s.push_str(&format!("Workers: {}\n", self.workers_spawned));
        }
        if self.exceeded {
            s.push_str("Deadline exceeded\n");
        }
        s
    }
}
