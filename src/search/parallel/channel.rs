//! Message channel between per-position workers and the coordinator.

use crate::search::progress::SharedProgress;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Worker matched the symbol at its position.
    Solved { position: usize, value: u32 },
    /// Worker saw the deadline fire before matching.
    Exceeded { position: usize },
    /// Worker has stopped. Always the last message a worker sends.
    Finished { position: usize, guesses: u64 },
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// The one result slot this worker may report on.
    pub position: usize,
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared counter and exceeded flag.
    pub shared: Arc<SharedProgress>,
}

impl WorkerChannels {
    /// Report a match for this worker's own position.
    pub fn send_solved(&self, value: u32) {
        let _ = self.to_coordinator.send(WorkerMessage::Solved {
            position: self.position,
            value,
        });
    }

    pub fn send_exceeded(&self) {
        let _ = self.to_coordinator.send(WorkerMessage::Exceeded {
            position: self.position,
        });
    }

    pub fn send_finished(&self, guesses: u64) {
        let _ = self.to_coordinator.send(WorkerMessage::Finished {
            position: self.position,
            guesses,
        });
    }
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers. Disconnects once every worker is done.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedProgress>,
}

/// Create channels for one worker per position.
///
/// Each worker is bound to a distinct position, so no two workers can ever
/// report on the same slot.
pub fn create_channels(
    positions: usize,
    shared: Arc<SharedProgress>,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    // Unbounded so workers never block on the coordinator
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..positions)
        .map(|position| WorkerChannels {
            position,
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
