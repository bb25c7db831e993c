//! Fan-out and no-op sinks.

use std::sync::Arc;

use crate::domain::entities::{ContextSnapshot, SnapshotSink};
use crate::shared::error::SinkError;

/// Forwards each snapshot to every inner sink.
///
/// A failing sink does not stop delivery to the rest; the first error is
/// returned after all sinks were tried.
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn SnapshotSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn SnapshotSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn push(&mut self, sink: Arc<dyn SnapshotSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl SnapshotSink for FanoutSink {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.emit(snapshot) {
                tracing::debug!(error = %e, "Sink failed during fan-out");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn emit(&self, _snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        Ok(())
    }
}
