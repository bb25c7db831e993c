//! Context snapshot and the sink contract.
//!
//! A snapshot is emitted after every recorded view. Its serialized field
//! names (`lastViewedSection`, `interactionCount`, `sessionStartTime`,
//! `viewedSections`) are a contract for downstream telemetry consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EnvironmentFlags, SectionId};
use crate::shared::error::SinkError;

/// Point-in-time copy of the visitor session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    pub last_viewed_section: SectionId,
    pub interaction_count: u64,
    pub session_start_time: DateTime<Utc>,
    /// Distinct sections in insertion order
    pub viewed_sections: Vec<SectionId>,
}

impl ContextSnapshot {
    /// Render as a JSON string.
    pub fn to_json(&self) -> Result<String, SinkError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Full agent-context document: visitor state plus the page environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub user: ContextSnapshot,
    pub environment: EnvironmentFlags,
}

/// Receiver of context snapshots (log stream, telemetry pipeline, ...).
///
/// Errors returned here never reach the caller of `record_view`.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSink: Send + Sync {
    fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError>;
}
