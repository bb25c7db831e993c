//! Context Service Tests
//!
//! Shared access from several tasks through the owning service.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use portfolio_context::application::dto::UiInteraction;
use portfolio_context::application::services::{ContextService, ViewDispatcher};
use portfolio_context::domain::{EnvironmentFlags, SessionContext};
use portfolio_context::infrastructure::sinks::{BroadcastSink, FanoutSink, MemorySink};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_handles_keep_exact_count() {
    let sink = Arc::new(MemorySink::new());
    let context = SessionContext::new(EnvironmentFlags::default(), sink.clone());
    let (handle, task) = ContextService::spawn(context);

    let views = ["about", "skills", "projects", "contact"];
    let mut tasks = Vec::new();
    for section in views {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..50 {
                handle.record_view(section).await.unwrap();
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.interaction_count, 200);
    assert_eq!(snapshot.viewed_sections.len(), 5);
    assert_eq!(snapshot.viewed_sections[0].as_str(), "hero");

    drop(handle);
    let context = task.await.unwrap();
    assert_eq!(context.interaction_count(), 200);
    assert_eq!(sink.len(), 200);
}

#[tokio::test]
async fn test_broadcast_subscriber_sees_dispatched_views() {
    let broadcast = BroadcastSink::new(16);
    let mut feed = broadcast.subscribe();
    let sinks = FanoutSink::new().with(Arc::new(broadcast));

    let context = SessionContext::new(EnvironmentFlags::default(), Arc::new(sinks));
    let mut dispatcher = ViewDispatcher::new(context);

    dispatcher.dispatch(UiInteraction::SectionNodeClicked("projects".into()));
    dispatcher.dispatch(UiInteraction::DataCubeClicked);

    let first = feed.recv().await.unwrap();
    let second = feed.recv().await.unwrap();
    assert_eq!(first.last_viewed_section.as_str(), "projects");
    assert_eq!(second.last_viewed_section.as_str(), "skills_knot");
    assert_eq!(second.interaction_count, 2);
}
