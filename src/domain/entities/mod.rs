//! # Domain Entities
//!
//! - **SessionContext**: Visitor session state with view recording and summary
//! - **ContextSnapshot**: The record emitted after every recorded view
//! - **ContextDocument**: Snapshot plus environment flags
//!
//! ## Sink Trait
//!
//! `SnapshotSink` defines where snapshots go. Implementations live in the
//! infrastructure layer, following the dependency inversion principle.

mod session_context;
mod snapshot;

pub use session_context::SessionContext;
pub use snapshot::{ContextDocument, ContextSnapshot, SnapshotSink};

#[cfg(test)]
pub use snapshot::MockSnapshotSink;
