//! Per-position parallel search: spawns one worker per position and joins them.

#![allow(dead_code)]

use crate::search::bounds::SearchBounds;
use crate::search::config::Strategy;
use crate::search::deadline::Deadline;
use crate::search::parallel::channel::{
    CoordinatorChannels, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::progress::SharedProgress;
use crate::search::result::{RunOutcome, SearchStatistics};
use crate::search::target::Target;
use crate::search::SearchAlgorithm;
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Multi-threaded per-position-parallel search
pub struct ParallelSearch {
    progress: Arc<SharedProgress>,
    statistics: SearchStatistics,
    worker_guesses: Vec<u64>,
}

impl ParallelSearch {
    pub fn new() -> Self {
        Self::with_progress(Arc::new(SharedProgress::default()))
    }

    pub fn with_progress(progress: Arc<SharedProgress>) -> Self {
        Self {
            progress,
            statistics: SearchStatistics::new(Strategy::Parallel),
            worker_guesses: Vec::new(),
        }
    }

    /// Guesses made by each worker in the last search, indexed by position.
    pub fn worker_guesses(&self) -> &[u64] {
        &self.worker_guesses
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for ParallelSearch {
    fn search(&mut self, target: &Target, bounds: &SearchBounds, deadline: &Deadline) -> RunOutcome {
        let positions = target.len();
        let (coordinator_channels, worker_channels) =
            create_channels(positions, Arc::clone(&self.progress));

        let mut found = vec![None; positions];
        let mut worker_guesses = vec![0; positions];

        thread::scope(|scope| {
            let handles: Vec<_> = worker_channels
                .into_iter()
                .map(|channels| {
                    let symbol = target.symbol(channels.position);
                    debug!(position = channels.position, "starting worker");
                    scope.spawn(move || run_worker(symbol, bounds, deadline, channels))
                })
                .collect();

            run_coordinator(coordinator_channels, &mut found, &mut worker_guesses);

            // Wait for all workers to finish
            for handle in handles {
                if handle.join().is_err() {
                    warn!("worker panicked");
                }
            }
        });
        deadline.stop();

        let outcome = RunOutcome {
            strategy: Strategy::Parallel,
            found,
            guess_count: self.progress.guesses(),
            elapsed: deadline.elapsed(),
            exceeded: self.progress.is_exceeded(),
        };
        self.statistics.record_outcome(&outcome);
        self.statistics.workers_spawned = positions;
        self.worker_guesses = worker_guesses;
        outcome
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.progress.reset();
        self.statistics = SearchStatistics::new(Strategy::Parallel);
        self.worker_guesses.clear();
    }
}

/// Drain worker messages until every worker has hung up.
///
/// The coordinator is the only writer of `found`; workers only report.
fn run_coordinator(
    channels: CoordinatorChannels,
    found: &mut [Option<u32>],
    worker_guesses: &mut [u64],
) {
    for message in channels.from_workers.iter() {
        match message {
            WorkerMessage::Solved { position, value } => {
                apply_solution(found, position, value);
            }
            WorkerMessage::Exceeded { position } => {
                debug!(
                    position,
                    guesses = channels.shared.guesses(),
                    "worker stopped on deadline"
                );
            }
            WorkerMessage::Finished { position, guesses } => {
                worker_guesses[position] = guesses;
            }
        }
    }
}

/// Write a solved value into its slot. Returns false if the slot was already set.
fn apply_solution(found: &mut [Option<u32>], position: usize, value: u32) -> bool {
    match found[position] {
        Some(existing) => {
            warn!(position, existing, value, "slot already solved, ignoring");
            false
        }
        None => {
            found[position] = Some(value);
            true
        }
    }
}

/// Scan one position, bailing out early once any worker trips the deadline.
fn run_worker(symbol: u32, bounds: &SearchBounds, deadline: &Deadline, channels: WorkerChannels) {
    deadline.start();
    let mut guesses = 0;

    for candidate in bounds.candidates() {
        if channels.shared.is_exceeded() {
            break;
        }

        channels.shared.record_guess();
        guesses += 1;
        let matched = candidate == symbol;

        if deadline.is_exceeded() {
            if channels.shared.mark_exceeded() {
                debug!(position = channels.position, "deadline exceeded");
            }
            channels.send_exceeded();
            break;
        }
        if matched {
            channels.send_solved(candidate);
            break;
        }
    }

    channels.send_finished(guesses);
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENEROUS_MS: u64 = 60_000;

    fn run(password: &str, limit_ms: u64) -> (RunOutcome, ParallelSearch) {
        let mut search = ParallelSearch::new();
        let outcome = search.search(
            &Target::new(password),
            &SearchBounds::digits(),
            &Deadline::from_millis(limit_ms),
        );
        (outcome, search)
    }

    #[test]
    fn test_every_slot_is_filled() {
        for password in ["048", "123456", "999999999999999999", "000000"] {
            let (outcome, search) = run(password, GENEROUS_MS);

            assert!(outcome.is_solved(), "failed on {}", password);
            assert_eq!(outcome.found_text().as_deref(), Some(password));
            assert_eq!(search.statistics().workers_spawned, password.len());
            assert_eq!(search.statistics().positions_solved, password.len());
        }
    }

    #[test]
    fn test_total_guesses_match_sequential_scan() {
        let (outcome, _) = run("048", GENEROUS_MS);
        assert_eq!(outcome.guess_count, 15);
    }

    #[test]
    fn test_worker_guesses_sum_to_total() {
        let (outcome, search) = run("5201314", GENEROUS_MS);

        assert_eq!(search.worker_guesses(), &[6, 3, 1, 2, 4, 2, 5]);
        assert_eq!(search.worker_guesses().iter().sum::<u64>(), outcome.guess_count);
    }

    #[test]
    fn test_zero_limit_exceeds() {
        let (outcome, search) = run("999999", 0);

        assert!(outcome.exceeded);
        assert!(outcome.guess_count >= 1);
        assert_eq!(outcome.found_text(), None);
        assert_eq!(search.statistics().workers_spawned, 6);
    }

    #[test]
    fn test_zero_limit_never_fills_a_slot() {
        // Every worker would match on its first candidate.
        let (outcome, _) = run("000000", 0);

        assert!(outcome.exceeded);
        assert!(outcome.found.iter().all(Option::is_none));
    }

    #[test]
    fn test_short_positions_survive_deadline() {
        // Workers for the low symbols match at once; the ones scanning toward
        // the top of the code point range are cut off.
        let bounds = SearchBounds::new(0, 0x10FFFF).unwrap();
        let mut search = ParallelSearch::new();
        let outcome = search.search(
            &Target::new("\u{0}\u{10FFFF}\u{0}\u{10FFFF}"),
            &bounds,
            &Deadline::from_millis(5),
        );

        assert!(outcome.exceeded);
        assert_eq!(outcome.found, vec![Some(0), None, Some(0), None]);
        assert_eq!(outcome.positions_solved(), 2);
        assert_eq!(search.statistics().workers_spawned, 4);
    }

    #[test]
    fn test_apply_solution_rejects_second_write() {
        let mut found = vec![None; 2];

        assert!(apply_solution(&mut found, 1, 55));
        assert!(!apply_solution(&mut found, 1, 56));
        assert_eq!(found, vec![None, Some(55)]);
    }

    #[test]
    fn test_reset_clears_worker_guesses() {
        let (_, mut search) = run("123456", GENEROUS_MS);
        search.reset();

        assert!(search.worker_guesses().is_empty());
        assert_eq!(search.statistics().guesses, 0);
    }
}
