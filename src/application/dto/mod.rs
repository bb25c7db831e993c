//! Data Transfer Objects
//!
//! Inbound events exchanged with the page's view-dispatch handlers.

pub mod interaction;

pub use interaction::UiInteraction;
