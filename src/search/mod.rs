//! Search strategies for recovering a fixed-length password
//!
//! Three interchangeable strategies implement [`SearchAlgorithm`]:
//! - Sequential: one position at a time, candidates in ascending order
//! - Parallel: one worker thread per position, joined before returning
//! - Ascending: the whole target as an integer, counted up from zero
//!
//! Every strategy checks the deadline after each comparison and reports a
//! missed budget through `RunOutcome::exceeded` rather than an error.

pub mod ascending;
pub mod bounds;
pub mod config;
pub mod deadline;
pub mod parallel;
pub mod progress;
pub mod result;
pub mod sequential;
pub mod target;

#[allow(unused_imports)]
pub use ascending::AscendingSearch;
#[allow(unused_imports)]
pub use bounds::{BoundsError, SearchBounds};
#[allow(unused_imports)]
pub use config::{SearchConfig, Strategy};
#[allow(unused_imports)]
pub use deadline::Deadline;
#[allow(unused_imports)]
pub use parallel::ParallelSearch;
#[allow(unused_imports)]
pub use progress::SharedProgress;
#[allow(unused_imports)]
pub use result::{RunOutcome, SearchStatistics};
#[allow(unused_imports)]
pub use sequential::SequentialSearch;
#[allow(unused_imports)]
pub use target::Target;

/// Trait for strategies that reconstruct a target within a deadline
pub trait SearchAlgorithm {
    /// Search for `target` over `bounds` until it is found or `deadline` fires
    ///
    /// # Arguments
    /// * `target` - The password to reconstruct
    /// * `bounds` - Inclusive alphabet range scanned per position
    /// * `deadline` - Budget measured from the first guess
    ///
    /// # Returns
    /// The found symbols (possibly partial), guess count, elapsed time and
    /// whether the deadline was exceeded
    fn search(&mut self, target: &Target, bounds: &SearchBounds, deadline: &Deadline) -> RunOutcome;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the guess counter and statistics for a new search
    fn reset(&mut self);
}
