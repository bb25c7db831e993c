//! Broadcast sink for live snapshot subscribers.

use tokio::sync::broadcast;

use crate::domain::entities::{ContextSnapshot, SnapshotSink};
use crate::shared::error::SinkError;

/// Publishes snapshots on a `tokio` broadcast channel.
///
/// Having no subscribers is normal and not an error. Slow subscribers lag
/// and lose the oldest snapshots once `capacity` is exceeded.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    sender: broadcast::Sender<ContextSnapshot>,
}

impl BroadcastSink {
    /// A `capacity` of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContextSnapshot> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl SnapshotSink for BroadcastSink {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        match self.sender.send(snapshot.clone()) {
            Ok(delivered) => {
                tracing::trace!(delivered, "Snapshot broadcast");
            }
            Err(_) => {
                tracing::trace!("Snapshot broadcast with no subscribers");
            }
        }
        Ok(())
    }
}
