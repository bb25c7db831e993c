//! Error Types
//!
//! Centralized error definitions. Neither `record_view` nor
//! `describe_context` returns these: sink failures stop at the emission
//! boundary, and `ContextError` only reaches callers of the service handle
//! or the host's configuration loader.

/// Failure reported by a snapshot sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal sink error: {0}")]
    Internal(String),
}

/// Errors surfaced by the host-facing layers.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Context service is no longer running")]
    ServiceClosed,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
