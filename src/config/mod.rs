//! # Configuration Module
//!
//! Host configuration loading. The session context itself reads nothing
//! from the environment; the host resolves settings and passes values in.
//!
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portfolio_context::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Page opens on {}", settings.context.default_section);
//! ```

mod settings;

pub use settings::*;
