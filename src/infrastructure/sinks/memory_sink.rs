//! In-memory sink used for replays and tests.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::{ContextSnapshot, SnapshotSink};
use crate::shared::error::SinkError;

/// Keeps every emitted snapshot.
///
/// Can be marked unavailable, in which case `emit` fails and nothing is
/// stored, emulating a detached log stream.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Mutex<Vec<ContextSnapshot>>,
    unavailable: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn snapshots(&self) -> Vec<ContextSnapshot> {
        self.snapshots.lock().clone()
    }

    pub fn last(&self) -> Option<ContextSnapshot> {
        self.snapshots.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.lock().is_empty()
    }

    pub fn clear(&self) {
        self.snapshots.lock().clear();
    }
}

impl SnapshotSink for MemorySink {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SinkError::Unavailable("memory sink marked unavailable".into()));
        }
        self.snapshots.lock().push(snapshot.clone());
        Ok(())
    }
}
