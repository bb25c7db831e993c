//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **SectionId**: Identifier of a page section or synthetic interaction area
//! - **ViewedSections**: Insertion-ordered, grow-only set of section IDs
//! - **EnvironmentFlags**: Theme and 3D-scene flags captured at startup

mod environment;
mod section_id;
mod viewed_sections;

pub use environment::*;
pub use section_id::*;
pub use viewed_sections::*;
