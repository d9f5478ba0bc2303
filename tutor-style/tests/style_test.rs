use proptest::prelude::*;
use tutor_core::config::{SessionConfig, StyleConfig};
use tutor_core::models::ChatMessage;
use tutor_session::SessionContext;
use tutor_style::{get_recommendations, LearningStyleDetector};

fn session_with(messages: &[&str]) -> SessionContext {
    let mut ctx = SessionContext::new("u", SessionConfig::default());
    for m in messages {
        ctx.add_message(ChatMessage::user(*m));
    }
    ctx
}

#[test]
fn estimate_scans_user_messages_only() {
    let mut ctx = session_with(&["Can you show me a diagram?"]);
    ctx.add_message(ChatMessage::assistant("Let's practice with an exercise."));
    let profile = LearningStyleDetector::default().estimate(&ctx);
    assert_eq!(profile.visual, 2.5);
    assert_eq!(profile.kinesthetic, 0.0);
}

#[test]
fn window_limits_history() {
    let ctx = session_with(&["I like a picture", "notes help", "notes again"]);
    let detector = LearningStyleDetector::new(StyleConfig { window: 2 });
    let profile = detector.estimate(&ctx);
    assert_eq!(profile.visual, 0.0);
    assert_eq!(profile.reading, 2.0);
}

#[test]
fn empty_session_is_all_zero() {
    let ctx = SessionContext::new("u", SessionConfig::default());
    assert!(LearningStyleDetector::default().estimate(&ctx).is_zero());
}

#[test]
fn recommendations_follow_estimate() {
    let ctx = session_with(&["I learn best hands-on, let me practice and do it myself"]);
    let profile = LearningStyleDetector::default().estimate(&ctx);
    let recs = get_recommendations(&profile);
    assert!(recs.iter().all(|r| r.contains("kinesthetic")));
}

proptest! {
    #[test]
    fn visual_keywords_strictly_increase_visual(k in 1usize..6, filler in "[a-z ]{0,40}") {
        let detector = LearningStyleDetector::default();
        let base = session_with(&["How do fractions work?", "I take notes"]);
        let before = detector.estimate(&base).visual;

        let mut with_extra = base.clone();
        let extra = format!("{} {}", filler, vec!["diagram"; k].join(" and "));
        with_extra.add_message(ChatMessage::user(extra));
        let after = detector.estimate(&with_extra).visual;

        prop_assert!(after > before, "before {before}, after {after}");
    }
}
