//! Application Startup
//!
//! The page controller: builds the sinks from settings, constructs the one
//! `SessionContext` for this session, and hands it to the dispatcher.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast;

use crate::application::services::ViewDispatcher;
use crate::config::Settings;
use crate::domain::entities::{ContextSnapshot, SessionContext};
use crate::infrastructure::sinks::{BroadcastSink, FanoutSink, MetricsSink, TracingSink};

/// Application instance
pub struct Application {
    dispatcher: ViewDispatcher,
    broadcast: BroadcastSink,
    metrics: Option<MetricsSink>,
    settings: Arc<Settings>,
}

impl Application {
    /// Build the application from settings
    pub fn build(settings: Settings) -> Result<Self> {
        let broadcast = BroadcastSink::new(settings.telemetry.broadcast_capacity);

        let mut sinks = FanoutSink::new()
            .with(Arc::new(TracingSink::new()))
            .with(Arc::new(broadcast.clone()));
        let metrics = if settings.telemetry.metrics {
            let sink = MetricsSink::new()?;
            sinks.push(Arc::new(sink.clone()));
            Some(sink)
        } else {
            None
        };
        tracing::debug!(sinks = sinks.len(), "Snapshot sinks configured");

        let context = SessionContext::with_default_section(
            settings.context.default_section(),
            settings.context.environment_flags(),
            Arc::new(sinks),
        );
        tracing::info!(
            default_section = %context.last_viewed_section(),
            theme = %context.environment().theme,
            "Session context created"
        );

        Ok(Self {
            dispatcher: ViewDispatcher::new(context),
            broadcast,
            metrics,
            settings: Arc::new(settings),
        })
    }

    /// Dispatch one interaction line per input line until EOF.
    ///
    /// Returns the number of interactions dispatched. Blank lines are skipped.
    pub async fn run_until_eof<R>(&mut self, input: R) -> Result<u64>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut dispatched = 0;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            self.dispatcher.dispatch_line(&line);
            dispatched += 1;
        }

        Ok(dispatched)
    }

    pub fn dispatcher(&mut self) -> &mut ViewDispatcher {
        &mut self.dispatcher
    }

    pub fn context(&self) -> &SessionContext {
        self.dispatcher.context()
    }

    pub fn prompt_context(&self) -> String {
        self.dispatcher.prompt_context()
    }

    /// Live snapshot feed.
    pub fn subscribe(&self) -> broadcast::Receiver<ContextSnapshot> {
        self.broadcast.subscribe()
    }

    /// Prometheus text, when metrics are enabled.
    pub fn metrics_text(&self) -> Option<String> {
        let metrics = self.metrics.as_ref()?;
        match metrics.gather() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to gather metrics");
                None
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
