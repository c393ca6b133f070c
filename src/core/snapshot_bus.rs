//=========================================================================
// Snapshot Bus
//=========================================================================
//
// Multi-consumer fan-out of game snapshots to presentation adapters.
//
// Architecture:
//   Orchestrator ──publish(Arc<GameState>)──> [Sender, Sender, ...]
//                                                  ↓        ↓
//                                             Receiver  Receiver  (adapters)
//
// Pattern: subscribe → publish (N consumers) → prune disconnected
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::game::GameState;

//=== SnapshotBus =========================================================

/// Publishes each new snapshot to every live subscriber.
///
/// Subscribers receive shared `Arc<GameState>` values and can only read
/// them. Dropping a receiver unsubscribes it on the next publish.
pub struct SnapshotBus {
    subscribers: Vec<Sender<Arc<GameState>>>,
}

impl SnapshotBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<Arc<GameState>> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `snapshot` to all subscribers, dropping any that hung up.
    pub fn publish(&mut self, snapshot: &Arc<GameState>) {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|tx| tx.send(Arc::clone(snapshot)).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            debug!(target: "core", "Pruned {} disconnected snapshot subscriber(s)", pruned);
        }
    }

    /// Number of live subscribers as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for SnapshotBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
