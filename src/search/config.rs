//! Configuration types for the search strategies

#![allow(dead_code)]

use crate::run::affinity::AffinityMask;

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One position at a time, each scanned from min to max
    #[default]
    Sequential,
    /// One worker thread per position, sharing the deadline and counter
    Parallel,
    /// The whole target as one integer, counted up from zero
    Ascending,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Parallel => write!(f, "parallel"),
            Strategy::Ascending => write!(f, "ascending"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" | "positional" => Ok(Strategy::Sequential),
            "parallel" | "par" | "per-position" => Ok(Strategy::Parallel),
            "ascending" | "asc" | "whole-value" => Ok(Strategy::Ascending),
            _ => Err(format!(
                "Unknown strategy: '{}'. Valid options: sequential, parallel, ascending",
                s
            )),
        }
    }
}

/// Configuration fixed for the lifetime of a [`RunCoordinator`](crate::run::RunCoordinator)
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Strategy used for every run
    pub strategy: Strategy,
    /// Processor affinity requested before each run (advisory)
    pub affinity: Option<AffinityMask>,
    /// Log per-position progress
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_affinity(mut self, mask: AffinityMask) -> Self {
        self.affinity = Some(mask);
        self
    }

    pub fn with_affinity_option(mut self, mask: Option<AffinityMask>) -> Self {
        self.affinity = mask;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
