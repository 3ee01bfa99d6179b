//! Per-position parallel search.
//!
//! # Architecture
//!
//! - A **coordinator** spawns one worker thread per target position, drains
//!   their messages into the result slots, and joins every worker before
//!   returning
//! - Each **worker** scans the alphabet for its own position only
//! - A **channel** carries solved values back to the coordinator, which is
//!   the single writer of the result
//! - **Shared state** (`SharedProgress`) holds the atomic guess counter and
//!   the exceeded flag all workers poll
//!
//! # Example
//!
//! ```ignore
//! let mut search = ParallelSearch::new();
//! let outcome = search.search(&target, &SearchBounds::digits(), &Deadline::from_millis(10_000));
//! ```

pub mod channel;
pub mod coordinator;

pub use coordinator::ParallelSearch;
