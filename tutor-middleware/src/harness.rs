//! Regression harness: replay scripted conversations through the middleware
//! and check the acceptance criteria each case declares.

use serde::{Deserialize, Serialize};

use tutor_core::models::PostProcessedResponse;
use tutor_core::traits::IUserProfileStore;

use crate::middleware::AiTutorMiddleware;

/// One earlier exchange, replayed through pre- and post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub user: String,
    pub assistant: String,
}

/// Acceptance criteria. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub memory_valid: Option<bool>,
    pub math_valid: Option<bool>,
    /// The final response must equal the raw LLM response.
    pub unchanged: Option<bool>,
    pub min_corrections: Option<usize>,
    pub response_contains: Vec<String>,
    pub response_excludes: Vec<String>,
    /// Each string must appear in at least one correction.
    pub correction_contains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionCase {
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
    pub question: String,
    pub llm_response: String,
    #[serde(default)]
    pub expect: Expectation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionOutcome {
    pub name: String,
    pub response: PostProcessedResponse,
    /// Human-readable description of every criterion that failed.
    pub violations: Vec<String>,
}

impl RegressionOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

impl RegressionCase {
    /// Replay on a fresh session for `user_id`, then check the final turn.
    pub async fn replay<P: IUserProfileStore>(
        &self,
        middleware: &AiTutorMiddleware<P>,
    ) -> RegressionOutcome {
        middleware.end_session(&self.user_id);

        for turn in &self.history {
            let ctx = middleware.pre_process_message(&self.user_id, &turn.user).await;
            middleware.post_process_response(&self.user_id, &turn.user, &turn.assistant, ctx);
        }

        let ctx = middleware.pre_process_message(&self.user_id, &self.question).await;
        let response =
            middleware.post_process_response(&self.user_id, &self.question, &self.llm_response, ctx);

        RegressionOutcome {
            name: self.name.clone(),
            violations: self.expect.violations(&self.llm_response, &response),
            response,
        }
    }
}

impl Expectation {
    fn violations(&self, llm_response: &str, got: &PostProcessedResponse) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(want) = self.memory_valid {
            if got.memory_valid != want {
                out.push(format!("memory_valid: expected {want}, got {}", got.memory_valid));
            }
        }
        if let Some(want) = self.math_valid {
            if got.math_valid != want {
                out.push(format!("math_valid: expected {want}, got {}", got.math_valid));
            }
        }
        if let Some(want) = self.unchanged {
            if (got.response == llm_response) != want {
                out.push(format!("unchanged: expected {want}, response was {:?}", got.response));
            }
        }
        if let Some(min) = self.min_corrections {
            if got.corrections.len() < min {
                out.push(format!(
                    "corrections: expected at least {min}, got {}",
                    got.corrections.len()
                ));
            }
        }
        for needle in &self.response_contains {
            if !got.response.contains(needle.as_str()) {
                out.push(format!("response missing {needle:?}"));
            }
        }
        for needle in &self.response_excludes {
            if got.response.contains(needle.as_str()) {
                out.push(format!("response still contains {needle:?}"));
            }
        }
        for needle in &self.correction_contains {
            if !got.corrections.iter().any(|c| c.contains(needle.as_str())) {
                out.push(format!("no correction mentions {needle:?}"));
            }
        }
        out
    }
}

/// Replay every case in order.
pub async fn replay_all<P: IUserProfileStore>(
    middleware: &AiTutorMiddleware<P>,
    cases: &[RegressionCase],
) -> Vec<RegressionOutcome> {
    let mut outcomes = Vec::with_capacity(cases.len());
    for case in cases {
        outcomes.push(case.replay(middleware).await);
    }
    outcomes
}
