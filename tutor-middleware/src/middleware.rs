//! AiTutorMiddleware: pre/post processing around the caller's LLM call.

use std::time::Instant;

use tracing::{warn, Instrument};

use tutor_core::config::TutorConfig;
use tutor_core::models::{ChatMessage, LearningStyleProfile, PostProcessedResponse, UserProfile};
use tutor_core::traits::{IArithmeticChecker, IUserProfileStore};
use tutor_math::MathEngine;
use tutor_observability::tracing_setup::events;
use tutor_observability::{post_process_span, pre_process_span};
use tutor_observability::{QualityMetrics, QualitySnapshot, TurnTelemetry};
use tutor_session::SessionManager;
use tutor_style::{get_recommendations, LearningStyleDetector};
use tutor_validation::{apply_corrections, MemoryClaimValidator};

use crate::context::PreProcessedContext;
use crate::fault::guarded;
use crate::profile_store::NoProfileStore;

/// Response-integrity middleware. One instance serves every user; per-user
/// state lives in the session registry.
pub struct AiTutorMiddleware<P: IUserProfileStore = NoProfileStore> {
    config: TutorConfig,
    sessions: SessionManager,
    memory: MemoryClaimValidator,
    math: Box<dyn IArithmeticChecker>,
    style: LearningStyleDetector,
    profiles: P,
    metrics: QualityMetrics,
}

impl AiTutorMiddleware<NoProfileStore> {
    /// Middleware for deployments without long-term profiles.
    pub fn without_profiles(config: TutorConfig) -> Self {
        Self::new(config, NoProfileStore)
    }
}

impl Default for AiTutorMiddleware<NoProfileStore> {
    fn default() -> Self {
        Self::without_profiles(TutorConfig::default())
    }
}

impl<P: IUserProfileStore> AiTutorMiddleware<P> {
    pub fn new(config: TutorConfig, profiles: P) -> Self {
        Self {
            sessions: SessionManager::new(config.session.clone()),
            memory: MemoryClaimValidator::new(config.memory.clone()),
            math: Box::new(MathEngine::new(config.math.clone())),
            style: LearningStyleDetector::new(config.style.clone()),
            profiles,
            metrics: QualityMetrics::new(),
            config,
        }
    }

    /// Replace the memory validator, e.g. with a custom claim catalogue.
    pub fn with_memory_validator(mut self, validator: MemoryClaimValidator) -> Self {
        self.memory = validator;
        self
    }

    /// Replace the arithmetic checker.
    pub fn with_math_checker(mut self, checker: impl IArithmeticChecker + 'static) -> Self {
        self.math = Box::new(checker);
        self
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    /// Session registry.
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Aggregate pass/fail counts and latency across all turns so far.
    pub fn metrics(&self) -> QualitySnapshot {
        self.metrics.snapshot()
    }

    /// Start a turn: wait for the user's previous turn, record the message,
    /// and fetch the profile when enabled. Never fails; a store error is
    /// logged and treated as "no profile".
    pub async fn pre_process_message(&self, user_id: &str, message: &str) -> PreProcessedContext {
        async {
            let mut session = self.sessions.lock_turn(user_id).await;
            session.add_message(ChatMessage::user(message));

            let profile = if self.config.middleware.profile_lookup {
                self.fetch_profile(user_id).await
            } else {
                None
            };

            PreProcessedContext {
                user_id: user_id.to_string(),
                session,
                profile,
            }
        }
        .instrument(pre_process_span!(user_id))
        .await
    }

    async fn fetch_profile(&self, user_id: &str) -> Option<UserProfile> {
        match self.profiles.get_profile(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                events::profile_lookup_failed(user_id, &e.to_string());
                self.metrics.record_profile_lookup_failure();
                None
            }
        }
    }

    /// Finish a turn: check memory claims, then arithmetic on the
    /// memory-corrected text, record the final assistant turn, and release
    /// the user's lock.
    ///
    /// `response` equals `llm_response` unless a correction was made. A
    /// validator fault counts as inconclusive: valid, no correction.
    pub fn post_process_response(
        &self,
        user_id: &str,
        message: &str,
        llm_response: &str,
        context: PreProcessedContext,
    ) -> PostProcessedResponse {
        let span = post_process_span!(user_id, llm_response.len());
        let _entered = span.enter();

        let started = Instant::now();
        let PreProcessedContext {
            user_id: context_user,
            mut session,
            profile,
        } = context;
        if context_user != user_id {
            warn!(
                user_id = %user_id,
                context_user = %context_user,
                "context belongs to another user; using the context's session"
            );
        }
        if session.get_recent_messages(1).first().map(|m| m.content.as_str()) != Some(message) {
            warn!(user_id = %user_id, "post-processing a message that is not the latest user turn");
        }

        let mut telemetry = TurnTelemetry::new();
        let mut corrections: Vec<String> = Vec::new();

        // Memory claims.
        let memory_started = Instant::now();
        let memory = guarded(user_id, "memory", || {
            let result = self.memory.validate(llm_response, &session, profile.as_ref());
            let text = if result.valid {
                llm_response.to_string()
            } else {
                apply_corrections(llm_response, &result)
            };
            (result, text)
        });
        telemetry.record_memory_time(memory_started.elapsed());

        let (memory_valid, after_memory) = match memory {
            Ok((result, text)) => {
                telemetry.memory_checks = result.claims.len() as u64;
                for claim in result.unverified_claims() {
                    telemetry.memory_failures += 1;
                    events::claim_rejected(user_id, &claim.matched_text, claim.topic.as_deref());
                }
                corrections.extend(result.corrections);
                (result.valid, text)
            }
            Err(_) => {
                telemetry.faults += 1;
                (true, llm_response.to_string())
            }
        };

        // Arithmetic, on the text the user will actually see.
        let math_started = Instant::now();
        let math = guarded(user_id, "math", || self.math.validate_and_annotate(&after_memory));
        telemetry.record_math_time(math_started.elapsed());

        let (math_valid, final_text) = match math {
            Ok(result) => {
                telemetry.math_checks = result.statements_checked as u64;
                telemetry.math_failures = result.issues.len() as u64;
                for issue in &result.issues {
                    events::math_mismatch(user_id, issue);
                }
                corrections.extend(result.issues);
                (result.valid, result.corrected_text.unwrap_or(after_memory))
            }
            Err(_) => {
                telemetry.faults += 1;
                (true, after_memory)
            }
        };

        let response = if corrections.is_empty() {
            llm_response.to_string()
        } else {
            final_text
        };
        session.add_message(ChatMessage::assistant(response.clone()));
        drop(session);

        telemetry.corrections = corrections.len() as u64;
        telemetry.record_total_time(started.elapsed());
        self.metrics.record_turn(&telemetry);
        events::turn_completed(user_id, corrections.len(), telemetry.total_micros);

        PostProcessedResponse {
            response,
            memory_valid,
            math_valid,
            corrections,
            telemetry: telemetry.to_map(),
        }
    }

    /// Learning-style estimate from the user's current session, if any.
    pub async fn learning_style(&self, user_id: &str) -> Option<LearningStyleProfile> {
        let session = self.sessions.snapshot(user_id).await?;
        Some(self.style.estimate(&session))
    }

    /// Study suggestions for the user. Falls back to the profile's persisted
    /// style when the session shows no preference.
    pub async fn recommendations(&self, user_id: &str) -> Vec<String> {
        let mut estimate = self.learning_style(user_id).await.unwrap_or_default();
        if estimate.is_zero() && self.config.middleware.profile_lookup {
            if let Some(stored) = self
                .fetch_profile(user_id)
                .await
                .and_then(|p| p.learning_style)
            {
                estimate = stored;
            }
        }
        get_recommendations(&estimate)
    }

    /// Drop a user's session. Returns whether one existed.
    pub fn end_session(&self, user_id: &str) -> bool {
        self.sessions.remove_session(user_id)
    }
}
