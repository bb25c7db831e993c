//! Session Context Tests
//!
//! State lifecycle of the visitor session context.

use fake::{Fake, Faker};
use pretty_assertions::assert_eq;
use test_case::test_case;

use portfolio_context::domain::SectionId;

use crate::common::TestSession;

#[test]
fn test_initial_state_reports_hero() {
    let session = TestSession::new();

    assert_eq!(
        session.context.describe_context(),
        "User is currently viewing hero. They have seen: hero."
    );
    assert_eq!(session.context.interaction_count(), 0);
    assert!(session.sink.is_empty());
}

#[test]
fn test_each_view_increments_count_by_one() {
    let mut session = TestSession::new();
    let sequence = ["about", "skills", "about", "hero", "projects", "skills_knot"];

    for (i, section) in sequence.iter().enumerate() {
        let before_count = session.context.interaction_count();
        let before_len = session.context.viewed_sections().len();

        session.context.record_view(*section);

        assert_eq!(session.context.interaction_count(), before_count + 1);
        assert!(session.context.viewed_sections().len() >= before_len);
        assert_eq!(session.context.interaction_count(), i as u64 + 1);
    }
}

#[test]
fn test_viewed_sections_never_shrink() {
    let mut session = TestSession::new();
    let mut seen_so_far: Vec<String> = session.viewed();

    for section in ["contact", "hero", "contact", "experience", "education"] {
        session.context.record_view(section);
        let now = session.viewed();
        assert!(seen_so_far.iter().all(|s| now.contains(s)));
        seen_so_far = now;
    }
}

#[test]
fn test_same_section_twice() {
    let mut session = TestSession::new();
    session.record_all(&["about", "about"]);

    assert_eq!(session.viewed(), vec!["hero", "about"]);
    assert_eq!(session.context.interaction_count(), 2);
}

#[test]
fn test_last_viewed_follows_latest_call() {
    let mut session = TestSession::new();
    session.record_all(&["about", "skills", "projects"]);

    assert_eq!(session.context.last_viewed_section().as_str(), "projects");
    assert_eq!(
        session.context.describe_context(),
        "User is currently viewing projects. They have seen: hero, about, skills, projects."
    );
}

#[test_case("" ; "empty string")]
#[test_case("\u{0}\u{1b}[31m\r\n" ; "control characters")]
#[test_case("   " ; "whitespace only")]
#[test_case("section with spaces, and commas" ; "punctuation")]
fn test_unusual_identifiers_are_recorded_verbatim(raw: &str) {
    let mut session = TestSession::new();
    session.context.record_view(raw);

    assert_eq!(session.context.last_viewed_section().as_str(), raw);
    assert!(session.context.has_viewed(&SectionId::new(raw)));
    assert_eq!(session.sink.len(), 1);
}

#[test]
fn test_very_long_identifier() {
    let mut session = TestSession::new();
    let long = "x".repeat(1 << 20);

    session.context.record_view(long.clone());

    assert_eq!(session.context.last_viewed_section().as_str().len(), 1 << 20);
    assert!(session.context.describe_context().contains(&long));
}

#[test]
fn test_random_identifiers_keep_invariants() {
    let mut session = TestSession::new();

    for i in 0..200 {
        let raw: String = Faker.fake();
        session.context.record_view(raw.clone());

        assert_eq!(session.context.last_viewed_section().as_str(), raw);
        assert!(session.context.has_viewed(session.context.last_viewed_section()));
        assert_eq!(session.context.interaction_count(), i + 1);
    }
}

#[test]
fn test_session_start_is_stable() {
    let mut session = TestSession::new();
    let start = session.context.session_start();

    session.record_all(&["about", "skills"]);

    assert_eq!(session.context.session_start(), start);
    assert!(session
        .sink
        .snapshots()
        .iter()
        .all(|s| s.session_start_time == start));
}
