//! Infrastructure Layer
//!
//! Contains the snapshot sink implementations:
//! - Structured logging (tracing)
//! - Live subscribers (tokio broadcast)
//! - Prometheus metrics
//! - In-memory capture

pub mod metrics;
pub mod sinks;
