//! # Domain Layer
//!
//! The visitor session context and the values it is built from.
//! Independent of sinks, configuration, and the host runtime.
//!
//! ## Structure
//!
//! - **entities**: `SessionContext`, snapshot types, and the sink trait
//! - **value_objects**: `SectionId`, `ViewedSections`, `EnvironmentFlags`

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
