//! Structured-log sink.

use crate::domain::entities::{ContextSnapshot, SnapshotSink};
use crate::shared::error::SinkError;

/// Writes every snapshot as a structured `tracing` event.
///
/// Events use the `portfolio_context::acp` target so subscribers can route
/// them separately from diagnostic logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotSink for TracingSink {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError> {
        let rendered = snapshot.to_json()?;
        let viewed: Vec<&str> = snapshot.viewed_sections.iter().map(|s| s.as_str()).collect();

        tracing::info!(
            target: "portfolio_context::acp",
            last_viewed_section = %snapshot.last_viewed_section,
            interaction_count = snapshot.interaction_count,
            session_start_time = %snapshot.session_start_time.to_rfc3339(),
            viewed_sections = ?viewed,
            snapshot = %rendered,
            "ACP context updated"
        );

        Ok(())
    }
}
