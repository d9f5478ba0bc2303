//! Golden regression cases replayed through the middleware.

use serde::Deserialize;
use test_fixtures::load_fixture;
use tutor_middleware::{replay_all, AiTutorMiddleware, RegressionCase};

#[derive(Deserialize)]
struct GoldenFile {
    cases: Vec<RegressionCase>,
}

#[tokio::test]
async fn golden_regression_cases_pass() {
    let golden: GoldenFile = load_fixture("golden/tutor_regression.json");
    assert!(!golden.cases.is_empty());

    let mw = AiTutorMiddleware::default();
    let outcomes = replay_all(&mw, &golden.cases).await;

    let failures: Vec<String> = outcomes
        .iter()
        .filter(|o| !o.passed())
        .map(|o| format!("{}: {}", o.name, o.violations.join("; ")))
        .collect();
    assert!(failures.is_empty(), "golden failures:\n{}", failures.join("\n"));
}

#[tokio::test]
async fn replay_isolates_each_case() {
    let golden: GoldenFile = load_fixture("golden/tutor_regression.json");
    let mw = AiTutorMiddleware::default();
    let case = &golden.cases[0];

    let first = case.replay(&mw).await;
    let second = case.replay(&mw).await;
    assert_eq!(first.response.response, second.response.response);
    assert_eq!(
        mw.sessions().snapshot(&case.user_id).await.unwrap().len(),
        2 * (case.history.len() + 1)
    );
}
