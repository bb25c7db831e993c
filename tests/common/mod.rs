//! Common Test Utilities
//!
//! Shared helpers and fixtures.

use std::sync::Arc;

use portfolio_context::domain::{EnvironmentFlags, SectionId, SessionContext};
use portfolio_context::infrastructure::sinks::MemorySink;

/// Session context wired to an in-memory sink
pub struct TestSession {
    pub context: SessionContext,
    pub sink: Arc<MemorySink>,
}

impl TestSession {
    pub fn new() -> Self {
        let sink = Arc::new(MemorySink::new());
        let context = SessionContext::new(EnvironmentFlags::default(), sink.clone());
        Self { context, sink }
    }

    /// Record each section in order
    pub fn record_all(&mut self, sections: &[&str]) {
        for section in sections {
            self.context.record_view(*section);
        }
    }

    /// Viewed sections as plain strings, in insertion order
    pub fn viewed(&self) -> Vec<String> {
        self.context
            .viewed_sections()
            .iter()
            .map(|s| s.as_str().to_owned())
            .collect()
    }
}

/// Convert string slices to section ids
pub fn sections(raw: &[&str]) -> Vec<SectionId> {
    raw.iter().map(|s| SectionId::new(*s)).collect()
}
