//! # Portfolio Context Library
//!
//! Tracks which sections of the portfolio page a visitor has engaged with
//! during one browsing session, and exposes that as:
//! - a structured snapshot emitted after every recorded view
//! - a one-sentence summary for an assistant prompt
//!
//! ## Architecture
//!
//! - **Domain Layer**: `SessionContext`, snapshots, section value objects
//! - **Application Layer**: view dispatch and the serialized context service
//! - **Infrastructure Layer**: snapshot sinks (tracing, broadcast, metrics)
//!
//! ## Module Structure
//!
//! ```text
//! portfolio_context/
//! +-- config/         Configuration management
//! +-- domain/         Session context, snapshot types, value objects
//! +-- application/    UI interaction dispatch and context service
//! +-- infrastructure/ Snapshot sinks and Prometheus metrics
//! +-- shared/         Common utilities (errors)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use portfolio_context::domain::{EnvironmentFlags, SessionContext};
//! use portfolio_context::infrastructure::sinks::MemorySink;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut context = SessionContext::new(EnvironmentFlags::default(), sink.clone());
//!
//! context.record_view("about");
//! context.record_view("about");
//!
//! assert_eq!(context.interaction_count(), 2);
//! assert_eq!(
//!     context.describe_context(),
//!     "User is currently viewing about. They have seen: hero, about."
//! );
//! assert_eq!(sink.len(), 2);
//! ```

// Configuration module
pub mod config;

// Domain layer - Session context and value objects
pub mod domain;

// Application layer - Dispatch and services
pub mod application;

// Infrastructure layer - Snapshot sinks
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application startup and page controller
pub mod startup;

// Telemetry and observability
pub mod telemetry;
