//! Prometheus metrics sink.

use crate::domain::entities::{ContextSnapshot, SnapshotSink};
use crate::infrastructure::metrics::SessionMetrics;
use crate::shared::error::SinkError;

/// Feeds snapshots into metrics owned by this sink.
///
/// Clones share the same registry, so the host can keep one clone for
/// `gather` while the context holds another.
#[derive(Clone)]
pub struct MetricsSink {
    metrics: SessionMetrics,
}

impl MetricsSink {
    pub fn new() -> Result<Self, SinkError> {
        Ok(Self {
            metrics: SessionMetrics::new()?,
        })
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Prometheus text for this sink's registry.
    pub fn gather(&self) -> Result<String, SinkError> {
        self.metrics.gather()
    }
}

impl SnapshotSink for MetricsSink {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        self.metrics.record_snapshot(snapshot);
        Ok(())
    }
}
