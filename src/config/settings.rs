//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::value_objects::{EnvironmentFlags, SectionId, Theme};
use crate::shared::error::ContextError;

/// Root configuration structure containing all host settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Session context defaults
    pub context: ContextSettings,

    /// Logging and snapshot sink configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Session context configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextSettings {
    /// Section the page opens on
    pub default_section: String,

    /// Page theme reported in the context document
    pub theme: Theme,

    /// Whether the 3D background scene is running
    pub scene_active: bool,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,

    /// Emit logs as JSON lines
    pub json: bool,

    /// Snapshot broadcast channel capacity (must be > 0)
    pub broadcast_capacity: usize,

    /// Feed snapshots into Prometheus metrics
    pub metrics: bool,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Config` if configuration cannot be loaded or
    /// parsed, or if the broadcast capacity is zero.
    pub fn load() -> Result<Self, ContextError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let builder = Self::builder(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__CONTEXT__DEFAULT_SECTION=about -> context.default_section = "about"
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Settings built from defaults only, ignoring files and environment.
    pub fn defaults() -> Result<Self, ContextError> {
        Self::from_builder(Self::builder("development")?)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ContextError> {
        let settings = builder
            .build()?
            .try_deserialize()
            .and_then(Self::validate)?;
        Ok(settings)
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("context.default_section", crate::domain::DEFAULT_SECTION)?
            .set_default("context.theme", "dark")?
            .set_default("context.scene_active", true)?
            .set_default("telemetry.log_filter", "info,portfolio_context=debug")?
            .set_default("telemetry.json", false)?
            .set_default("telemetry.broadcast_capacity", 64_i64)?
            .set_default("telemetry.metrics", true)
    }

    fn validate(settings: Self) -> Result<Self, ConfigError> {
        if settings.telemetry.broadcast_capacity == 0 {
            return Err(ConfigError::Message(
                "telemetry.broadcast_capacity must be greater than zero".into(),
            ));
        }
        Ok(settings)
    }
}

impl ContextSettings {
    pub fn default_section(&self) -> SectionId {
        SectionId::new(self.default_section.clone())
    }

    pub fn environment_flags(&self) -> EnvironmentFlags {
        EnvironmentFlags::new(self.theme, self.scene_active)
    }
}
