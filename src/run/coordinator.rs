//! Owns one run at a time: resets the counter, builds the deadline, dispatches
//! to the configured strategy and records where the run ended up.

#![allow(dead_code)]

use crate::run::affinity;
use crate::search::{
    AscendingSearch, Deadline, ParallelSearch, RunOutcome, SearchAlgorithm, SearchBounds,
    SearchConfig, SearchStatistics, SequentialSearch, SharedProgress, Strategy, Target,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Validated input for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub target: Target,
    pub limit: Duration,
    pub bounds: SearchBounds,
}

impl RunRequest {
    pub fn new(password: &str, limit_ms: u64, bounds: SearchBounds) -> Self {
        Self {
            target: Target::new(password),
            limit: Duration::from_millis(limit_ms),
            bounds,
        }
    }
}

/// Where the coordinator is in its per-run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Solved,
    Exceeded,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
            RunState::Solved => write!(f, "solved"),
            RunState::Exceeded => write!(f, "exceeded"),
        }
    }
}

pub struct RunCoordinator {
    config: SearchConfig,
    progress: Arc<SharedProgress>,
    state: RunState,
    runs_completed: u64,
    last_statistics: Option<SearchStatistics>,
}

impl RunCoordinator {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            progress: Arc::new(SharedProgress::default()),
            state: RunState::Idle,
            runs_completed: 0,
            last_statistics: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    /// Guesses counted so far in the current or most recent run.
    pub fn guesses(&self) -> u64 {
        self.progress.guesses()
    }

    pub fn last_statistics(&self) -> Option<&SearchStatistics> {
        self.last_statistics.as_ref()
    }

    /// Return to `Idle` with a zeroed counter.
    pub fn reset(&mut self) {
        self.progress.reset();
        self.state = RunState::Idle;
    }

    /// Execute one run to completion.
    pub fn run(&mut self, request: &RunRequest) -> RunOutcome {
        self.reset();
        self.request_affinity();

        info!(
            strategy = %self.config.strategy,
            length = request.target.len(),
            limit = ?request.limit,
            bounds = %request.bounds,
            "finding password"
        );

        let deadline = Deadline::new(request.limit);
        self.state = RunState::Running;

        let mut search = self.build_search();
        search.reset();
        let outcome = search.search(&request.target, &request.bounds, &deadline);

        self.state = if outcome.exceeded {
            RunState::Exceeded
        } else {
            RunState::Solved
        };
        self.runs_completed += 1;
        self.last_statistics = Some(search.statistics());

        info!(
            state = %self.state,
            guesses = outcome.guess_count,
            elapsed = ?outcome.elapsed,
            "run finished"
        );
        if self.config.verbose {
            if let Some(stats) = &self.last_statistics {
                debug!("search statistics:\n{}", stats.format_summary());
            }
        }

        outcome
    }

    fn build_search(&self) -> Box<dyn SearchAlgorithm> {
        let progress = Arc::clone(&self.progress);
        match self.config.strategy {
            Strategy::Sequential => Box::new(SequentialSearch::with_progress(progress)),
            Strategy::Parallel => Box::new(ParallelSearch::with_progress(progress)),
            Strategy::Ascending => Box::new(AscendingSearch::with_progress(progress)),
        }
    }

    fn request_affinity(&self) {
        let Some(mask) = self.config.affinity else {
            return;
        };
        match affinity::apply(mask) {
            Ok(cpus) => info!(%mask, ?cpus, "using affinity"),
            Err(e) => warn!(%mask, "processor affinity not applied: {}", e),
        }
    }
}

impl Default for RunCoordinator {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENEROUS_MS: u64 = 60_000;

    fn coordinator(strategy: Strategy) -> RunCoordinator {
        RunCoordinator::new(SearchConfig::default().with_strategy(strategy))
    }

    #[test]
    fn test_starts_idle() {
        let coordinator = RunCoordinator::default();
        assert_eq!(coordinator.state(), RunState::Idle);
        assert_eq!(coordinator.runs_completed(), 0);
        assert!(coordinator.last_statistics().is_none());
    }

    #[test]
    fn test_solved_run() {
        let mut coordinator = coordinator(Strategy::Sequential);
        let outcome = coordinator.run(&RunRequest::new("048", GENEROUS_MS, SearchBounds::digits()));

        assert_eq!(coordinator.state(), RunState::Solved);
        assert_eq!(outcome.found_text().as_deref(), Some("048"));
        assert_eq!(outcome.guess_count, 15);
        assert_eq!(coordinator.guesses(), 15);
    }

    #[test]
    fn test_exceeded_run() {
        let mut coordinator = coordinator(Strategy::Sequential);
        let outcome = coordinator.run(&RunRequest::new("999999", 0, SearchBounds::digits()));

        assert_eq!(coordinator.state(), RunState::Exceeded);
        assert!(outcome.exceeded);
        assert_eq!(outcome.found[0], None);
    }

    #[test]
    fn test_counter_resets_between_runs() {
        let mut coordinator = coordinator(Strategy::Sequential);
        let request = RunRequest::new("555555", GENEROUS_MS, SearchBounds::digits());

        let first = coordinator.run(&request);
        let second = coordinator.run(&request);

        assert_eq!(first.guess_count, 36);
        assert_eq!(second.guess_count, 36);
        assert_eq!(first.found, second.found);
        assert_eq!(coordinator.runs_completed(), 2);
    }

    #[test]
    fn test_exceeded_then_solved() {
        let mut coordinator = coordinator(Strategy::Sequential);

        coordinator.run(&RunRequest::new("123456", 0, SearchBounds::digits()));
        assert_eq!(coordinator.state(), RunState::Exceeded);

        let outcome = coordinator.run(&RunRequest::new("123456", GENEROUS_MS, SearchBounds::digits()));
        assert_eq!(coordinator.state(), RunState::Solved);
        assert!(!outcome.exceeded);
        assert_eq!(outcome.guess_count, 2 + 3 + 4 + 5 + 6 + 7);
    }

    #[test]
    fn test_statistics_cover_only_latest_run() {
        let mut coordinator = coordinator(Strategy::Ascending);
        coordinator.run(&RunRequest::new("001234", GENEROUS_MS, SearchBounds::digits()));
        coordinator.run(&RunRequest::new("000009", GENEROUS_MS, SearchBounds::digits()));

        let stats = coordinator.last_statistics().unwrap();
        assert_eq!(stats.guesses, 10);
        assert_eq!(coordinator.guesses(), 10);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut coordinator = coordinator(Strategy::Sequential);
        coordinator.run(&RunRequest::new("123456", GENEROUS_MS, SearchBounds::digits()));
        coordinator.reset();

        assert_eq!(coordinator.state(), RunState::Idle);
        assert_eq!(coordinator.guesses(), 0);
    }

    #[test]
    fn test_every_strategy_solves() {
        for strategy in [Strategy::Sequential, Strategy::Parallel, Strategy::Ascending] {
            let mut coordinator = coordinator(strategy);
            let outcome =
                coordinator.run(&RunRequest::new("000042", GENEROUS_MS, SearchBounds::digits()));

            assert_eq!(outcome.strategy, strategy);
            assert_eq!(outcome.found_text().as_deref(), Some("000042"), "{}", strategy);
            assert_eq!(coordinator.state(), RunState::Solved);
            assert_eq!(coordinator.last_statistics().unwrap().strategy, strategy);
        }
    }

    #[test]
    fn test_parallel_statistics_report_workers() {
        let mut coordinator = coordinator(Strategy::Parallel);
        coordinator.run(&RunRequest::new("12345678", GENEROUS_MS, SearchBounds::digits()));

        assert_eq!(coordinator.last_statistics().unwrap().workers_spawned, 8);
    }

    #[test]
    fn test_unusable_affinity_does_not_affect_run() {
        let config = SearchConfig::default().with_affinity(crate::run::affinity::AffinityMask::new(0));
        let mut coordinator = RunCoordinator::new(config);
        let outcome = coordinator.run(&RunRequest::new("048", GENEROUS_MS, SearchBounds::digits()));

        assert!(outcome.is_solved());
        assert_eq!(outcome.guess_count, 15);
    }
}
