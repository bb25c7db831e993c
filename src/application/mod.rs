//! Application Layer
//!
//! Connects the page's view-dispatch handlers to the session context.

pub mod dto;
pub mod services;
