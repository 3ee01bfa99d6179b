//! Run coordination: one request in, one outcome out.

pub mod affinity;
pub mod coordinator;

#[allow(unused_imports)]
pub use affinity::{AffinityError, AffinityMask};
#[allow(unused_imports)]
pub use coordinator::{RunCoordinator, RunRequest, RunState};
