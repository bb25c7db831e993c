//! Application Services
//!
//! Services that coordinate the session context with the page.
//!
//! ## Available Services
//!
//! - **ViewDispatcher**: Single-threaded owner that turns UI interactions into recorded views
//! - **ContextService**: Owning task plus cloneable handles for multi-threaded hosts

pub mod context_service;
pub mod view_dispatcher;

pub use context_service::{ContextHandle, ContextService};
pub use view_dispatcher::ViewDispatcher;
