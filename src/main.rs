//! # Portfolio Context Host
//!
//! Plays the page controller for one visitor session:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Session context and snapshot sinks
//! - Interaction feed from stdin, one event per line
//!   (`node:<id>`, `nav:<id>`, `cube`, or a bare section id)

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use portfolio_context::config::Settings;
use portfolio_context::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    portfolio_context::telemetry::init_tracing(&settings.telemetry);

    info!(
        environment = %settings.environment,
        default_section = %settings.context.default_section,
        "Configuration loaded"
    );

    let mut application = Application::build(settings)?;

    info!("Reading interactions from stdin");
    let dispatched = application
        .run_until_eof(BufReader::new(tokio::io::stdin()))
        .await?;

    info!(
        dispatched,
        prompt = %application.prompt_context(),
        "Session finished"
    );

    if let Some(metrics) = application.metrics_text() {
        println!("{}", metrics);
    }

    Ok(())
}
