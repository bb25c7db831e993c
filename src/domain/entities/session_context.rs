//! Visitor session context.
//!
//! Tracks which sections a visitor engaged with during one page session and
//! exposes that as a snapshot (for telemetry) and as a one-sentence summary
//! (for prompt assembly).
//!
//! Invariants:
//! - `last_viewed_section` is always a member of `viewed_sections`
//! - `viewed_sections` never loses a member
//! - `interaction_count` equals the number of `record_view` calls
//! - `session_start` never changes after construction

use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::snapshot::{ContextDocument, ContextSnapshot, SnapshotSink};
use crate::domain::value_objects::{EnvironmentFlags, SectionId, ViewedSections};

/// Session-lifetime visitor state.
///
/// Owned by the page controller and lent to whichever dispatcher records
/// views. Mutation needs `&mut self`, so a single owner serializes writes.
pub struct SessionContext {
    last_viewed_section: SectionId,
    viewed_sections: ViewedSections,
    session_start: DateTime<Utc>,
    interaction_count: u64,
    environment: EnvironmentFlags,
    sink: Arc<dyn SnapshotSink>,
}

impl SessionContext {
    /// Create a context starting on the `hero` section.
    pub fn new(environment: EnvironmentFlags, sink: Arc<dyn SnapshotSink>) -> Self {
        Self::with_default_section(SectionId::default_section(), environment, sink)
    }

    /// Create a context starting on `default_section`.
    pub fn with_default_section(
        default_section: impl Into<SectionId>,
        environment: EnvironmentFlags,
        sink: Arc<dyn SnapshotSink>,
    ) -> Self {
        let default_section = default_section.into();
        Self {
            viewed_sections: ViewedSections::starting_with(default_section.clone()),
            last_viewed_section: default_section,
            session_start: Utc::now(),
            interaction_count: 0,
            environment,
            sink,
        }
    }

    /// Record that the visitor focused `section`.
    ///
    /// Any identifier is accepted. The snapshot is emitted after the state
    /// change; sink failures (including panics) are logged and dropped.
    pub fn record_view(&mut self, section: impl Into<SectionId>) {
        let section = section.into();
        let newly_seen = self.viewed_sections.insert(section.clone());
        self.last_viewed_section = section;
        self.interaction_count += 1;

        tracing::debug!(
            section = %self.last_viewed_section,
            newly_seen,
            interaction_count = self.interaction_count,
            "Section view recorded"
        );

        self.emit_snapshot();
    }

    /// Natural-language summary for prompt assembly.
    pub fn describe_context(&self) -> String {
        format!(
            "User is currently viewing {}. They have seen: {}.",
            self.last_viewed_section,
            self.viewed_sections.join(", ")
        )
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            last_viewed_section: self.last_viewed_section.clone(),
            interaction_count: self.interaction_count,
            session_start_time: self.session_start,
            viewed_sections: self.viewed_sections.to_vec(),
        }
    }

    /// Visitor state together with the environment flags.
    pub fn context_document(&self) -> ContextDocument {
        ContextDocument {
            user: self.snapshot(),
            environment: self.environment,
        }
    }

    pub fn last_viewed_section(&self) -> &SectionId {
        &self.last_viewed_section
    }

    pub fn viewed_sections(&self) -> &ViewedSections {
        &self.viewed_sections
    }

    pub fn has_viewed(&self, section: &SectionId) -> bool {
        self.viewed_sections.contains(section)
    }

    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }

    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    pub fn environment(&self) -> EnvironmentFlags {
        self.environment
    }

    fn emit_snapshot(&self) {
        let snapshot = self.snapshot();
        let sink = &self.sink;

        match panic::catch_unwind(AssertUnwindSafe(|| sink.emit(&snapshot))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Context snapshot dropped");
            }
            Err(_) => {
                tracing::warn!("Snapshot sink panicked; context snapshot dropped");
            }
        }
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("last_viewed_section", &self.last_viewed_section)
            .field("viewed_sections", &self.viewed_sections)
            .field("session_start", &self.session_start)
            .field("interaction_count", &self.interaction_count)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
