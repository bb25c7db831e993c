//! Snapshot Sinks
//!
//! `SnapshotSink` implementations. The host composes them with `FanoutSink`.

mod broadcast_sink;
mod fanout_sink;
mod memory_sink;
mod metrics_sink;
mod tracing_sink;

pub use broadcast_sink::BroadcastSink;
pub use fanout_sink::{FanoutSink, NullSink};
pub use memory_sink::MemorySink;
pub use metrics_sink::MetricsSink;
pub use tracing_sink::TracingSink;
