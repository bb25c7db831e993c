//! Prometheus Metrics Module
//!
//! Visitor interaction metrics derived from context snapshots. Each
//! `SessionMetrics` owns its registry, so every session reports its own
//! values.
//!
//! # Metrics Collected
//! - Total recorded views
//! - Views of synthetic interaction areas
//! - Distinct sections seen in the session

use prometheus::{Encoder, IntCounter, IntGauge, Opts, Registry, TextEncoder};

use crate::domain::entities::ContextSnapshot;
use crate::shared::error::SinkError;

/// Metric namespace
const NAMESPACE: &str = "portfolio_context";

/// Registry and metrics for one visitor session.
#[derive(Clone)]
pub struct SessionMetrics {
    registry: Registry,
    interactions_total: IntCounter,
    synthetic_interactions_total: IntCounter,
    distinct_sections: IntGauge,
}

impl SessionMetrics {
    /// Create and register the session metrics.
    pub fn new() -> Result<Self, SinkError> {
        let registry = Registry::new();

        // Recorded views, one per `record_view` call
        let interactions_total = IntCounter::with_opts(
            Opts::new("interactions_total", "Total number of recorded section views")
                .namespace(NAMESPACE),
        )
        .map_err(metric_error)?;

        let synthetic_interactions_total = IntCounter::with_opts(
            Opts::new(
                "synthetic_interactions_total",
                "Recorded views of synthetic interaction areas",
            )
            .namespace(NAMESPACE),
        )
        .map_err(metric_error)?;

        let distinct_sections = IntGauge::with_opts(
            Opts::new("distinct_sections", "Distinct sections seen this session")
                .namespace(NAMESPACE),
        )
        .map_err(metric_error)?;

        registry
            .register(Box::new(interactions_total.clone()))
            .map_err(metric_error)?;
        registry
            .register(Box::new(synthetic_interactions_total.clone()))
            .map_err(metric_error)?;
        registry
            .register(Box::new(distinct_sections.clone()))
            .map_err(metric_error)?;

        Ok(Self {
            registry,
            interactions_total,
            synthetic_interactions_total,
            distinct_sections,
        })
    }

    /// Record one snapshot
    pub fn record_snapshot(&self, snapshot: &ContextSnapshot) {
        self.interactions_total.inc();
        if snapshot.last_viewed_section.is_synthetic() {
            self.synthetic_interactions_total.inc();
        }
        self.distinct_sections
            .set(snapshot.viewed_sections.len() as i64);
    }

    /// Collect and encode all metrics as Prometheus text format
    pub fn gather(&self) -> Result<String, SinkError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| SinkError::Internal(format!("Metrics encoding failed: {}", e)))?;
        String::from_utf8(buffer)
            .map_err(|e| SinkError::Internal(format!("Metrics are not valid UTF-8: {}", e)))
    }

    pub fn interactions_total(&self) -> u64 {
        self.interactions_total.get()
    }

    pub fn synthetic_interactions_total(&self) -> u64 {
        self.synthetic_interactions_total.get()
    }

    pub fn distinct_sections(&self) -> i64 {
        self.distinct_sections.get()
    }
}

fn metric_error(e: prometheus::Error) -> SinkError {
    SinkError::Internal(format!("Metrics setup failed: {}", e))
}
