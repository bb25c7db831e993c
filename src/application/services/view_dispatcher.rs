//! View Dispatcher
//!
//! Receives UI interactions and records them on the session context it was
//! handed. The dispatcher is the only holder of a mutable context.

use crate::application::dto::UiInteraction;
use crate::domain::entities::SessionContext;
use crate::domain::value_objects::SectionId;

/// Routes UI interactions into the visitor session context.
#[derive(Debug)]
pub struct ViewDispatcher {
    context: SessionContext,
}

impl ViewDispatcher {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// Record the section an interaction focuses and return it.
    pub fn dispatch(&mut self, interaction: UiInteraction) -> SectionId {
        let section = interaction.section();
        tracing::debug!(?interaction, "Dispatching UI interaction");
        self.context.record_view(section.clone());
        section
    }

    /// Parse a host event line and dispatch it.
    pub fn dispatch_line(&mut self, line: &str) -> SectionId {
        self.dispatch(UiInteraction::parse(line))
    }

    /// Summary sentence for the assistant prompt.
    pub fn prompt_context(&self) -> String {
        self.context.describe_context()
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn into_context(self) -> SessionContext {
        self.context
    }
}
