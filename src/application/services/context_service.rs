//! Context Service
//!
//! Runs a `SessionContext` inside a single owning tokio task so that hosts
//! with several threads or tasks can share it. Every request goes through
//! one channel, which serializes `record_view` calls.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::domain::entities::{ContextSnapshot, SessionContext};
use crate::domain::value_objects::SectionId;
use crate::shared::error::ContextError;

/// Command queue depth
const COMMAND_BUFFER: usize = 256;

enum Command {
    RecordView(SectionId),
    Describe(oneshot::Sender<String>),
    Snapshot(oneshot::Sender<ContextSnapshot>),
}

/// Spawns the owning task.
pub struct ContextService;

impl ContextService {
    /// Move `context` into a new task and return a handle to it.
    ///
    /// The task ends once every handle is dropped and yields the context
    /// back through the `JoinHandle`. Must be called inside a tokio runtime.
    pub fn spawn(context: SessionContext) -> (ContextHandle, JoinHandle<SessionContext>) {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(run(context, rx));
        (ContextHandle { tx }, task)
    }
}

async fn run(mut context: SessionContext, mut rx: mpsc::Receiver<Command>) -> SessionContext {
    tracing::debug!("Context service started");

    while let Some(command) = rx.recv().await {
        match command {
            Command::RecordView(section) => context.record_view(section),
            Command::Describe(reply) => {
                // Caller may have given up waiting
                let _ = reply.send(context.describe_context());
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(context.snapshot());
            }
        }
    }

    tracing::debug!(
        interaction_count = context.interaction_count(),
        "Context service stopped"
    );
    context
}

/// Cloneable handle to the context task.
#[derive(Clone)]
pub struct ContextHandle {
    tx: mpsc::Sender<Command>,
}

impl ContextHandle {
    /// Queue a view. Views from one handle are applied in call order.
    pub async fn record_view(&self, section: impl Into<SectionId>) -> Result<(), ContextError> {
        self.tx
            .send(Command::RecordView(section.into()))
            .await
            .map_err(|_| ContextError::ServiceClosed)
    }

    pub async fn describe_context(&self) -> Result<String, ContextError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Describe(reply))
            .await
            .map_err(|_| ContextError::ServiceClosed)?;
        rx.await.map_err(|_| ContextError::ServiceClosed)
    }

    pub async fn snapshot(&self) -> Result<ContextSnapshot, ContextError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot(reply))
            .await
            .map_err(|_| ContextError::ServiceClosed)?;
        rx.await.map_err(|_| ContextError::ServiceClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
