//! Snapshot Emission Tests
//!
//! What telemetry consumers observe.

use std::sync::Arc;

use mockall::mock;
use pretty_assertions::assert_eq;

use portfolio_context::domain::{ContextSnapshot, EnvironmentFlags, SessionContext, SnapshotSink};
use portfolio_context::infrastructure::sinks::{FanoutSink, MemorySink, TracingSink};
use portfolio_context::shared::error::SinkError;

use crate::common::{sections, TestSession};

mock! {
    pub Sink {}

    impl SnapshotSink for Sink {
        fn emit(&self, snapshot: &ContextSnapshot) -> Result<(), SinkError>;
    }
}

#[test]
fn test_emitted_sections_keep_insertion_order() {
    let mut session = TestSession::new();
    session.record_all(&["hero", "about", "skills", "about"]);

    let last = session.sink.last().unwrap();
    assert_eq!(last.viewed_sections, sections(&["hero", "about", "skills"]));
    assert_eq!(last.last_viewed_section.as_str(), "about");
    assert_eq!(last.interaction_count, 4);
}

#[test]
fn test_one_snapshot_per_view_with_exact_counts() {
    let mut session = TestSession::new();
    session.record_all(&["about", "about", "contact"]);

    let counts: Vec<u64> = session
        .sink
        .snapshots()
        .iter()
        .map(|s| s.interaction_count)
        .collect();
    assert_eq!(counts, vec![1, 2, 3]);
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = TestSession::new();
    session.context.record_view("skills");

    let json = serde_json::to_value(session.sink.last().unwrap()).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["interactionCount", "lastViewedSection", "sessionStartTime", "viewedSections"]
    );
    assert_eq!(json["viewedSections"], serde_json::json!(["hero", "skills"]));
    assert!(json["sessionStartTime"].is_string());
}

#[test]
fn test_unavailable_sink_never_reaches_caller() {
    let mut session = TestSession::new();
    session.sink.set_unavailable(true);

    session.record_all(&["about", "skills"]);

    assert_eq!(session.context.interaction_count(), 2);
    assert!(session.sink.is_empty());

    session.sink.set_unavailable(false);
    session.context.record_view("projects");
    assert_eq!(session.sink.last().unwrap().interaction_count, 3);
}

#[test]
fn test_mock_sink_failure_is_swallowed() {
    let mut sink = MockSink::new();
    sink.expect_emit()
        .times(3)
        .returning(|_| Err(SinkError::Internal("telemetry offline".into())));

    let mut context = SessionContext::new(EnvironmentFlags::default(), Arc::new(sink));
    for section in ["about", "skills", "contact"] {
        context.record_view(section);
    }

    assert_eq!(context.interaction_count(), 3);
    assert_eq!(context.last_viewed_section().as_str(), "contact");
}

#[test]
fn test_fanout_with_broken_sink_still_delivers() {
    let broken = Arc::new(MemorySink::new());
    broken.set_unavailable(true);
    let healthy = Arc::new(MemorySink::new());
    let sinks = FanoutSink::new()
        .with(Arc::new(TracingSink::new()))
        .with(broken.clone())
        .with(healthy.clone());

    let mut context = SessionContext::new(EnvironmentFlags::default(), Arc::new(sinks));
    context.record_view("education");

    assert!(broken.is_empty());
    assert_eq!(healthy.len(), 1);
}

#[test]
fn test_describe_does_not_emit() {
    let mut session = TestSession::new();
    session.context.record_view("about");
    let _ = session.context.describe_context();
    let _ = session.context.snapshot();
    let _ = session.context.context_document();

    assert_eq!(session.sink.len(), 1);
}
