//! MemoryClaimValidator: checks every memory claim against the session
//! topic index and the optional long-term profile.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use tutor_core::config::MemoryConfig;
use tutor_core::models::{ClaimClass, MemoryClaim, MemoryValidationResult, UserProfile};
use tutor_session::topics;
use tutor_session::SessionContext;

use crate::catalogue::{ClaimPattern, DEFAULT_CLAIM_PATTERNS};
use crate::correction::generate_honest_alternative;
use crate::referent;

/// A catalogue row with its regex compiled.
#[derive(Debug, Clone)]
struct CompiledPattern {
    regex: Regex,
    class: ClaimClass,
}

fn compile(patterns: &[ClaimPattern]) -> Result<Vec<CompiledPattern>, regex::Error> {
    patterns
        .iter()
        .map(|p| {
            Ok(CompiledPattern {
                regex: Regex::new(&format!(r"(?i)\b{}\b", p.pattern.replace(' ', r"\s+")))?,
                class: p.class,
            })
        })
        .collect()
}

static DEFAULT_COMPILED: LazyLock<Vec<CompiledPattern>> =
    LazyLock::new(|| compile(DEFAULT_CLAIM_PATTERNS).unwrap());

/// Detects false claims of shared history in a candidate response.
#[derive(Debug, Clone)]
pub struct MemoryClaimValidator {
    patterns: Vec<CompiledPattern>,
    config: MemoryConfig,
}

impl Default for MemoryClaimValidator {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

impl MemoryClaimValidator {
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            patterns: DEFAULT_COMPILED.clone(),
            config,
        }
    }

    /// Build with a custom catalogue.
    pub fn with_patterns(
        patterns: &[ClaimPattern],
        config: MemoryConfig,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: compile(patterns)?,
            config,
        })
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Claim spans in `response`, earliest first. Overlapping matches keep
    /// the earliest, then longest, span.
    fn find_claims(&self, response: &str) -> Vec<(usize, usize, ClaimClass)> {
        let mut spans: Vec<(usize, usize, ClaimClass)> = self
            .patterns
            .iter()
            .flat_map(|p| {
                p.regex
                    .find_iter(response)
                    .map(move |m| (m.start(), m.end(), p.class))
            })
            .collect();
        spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut kept: Vec<(usize, usize, ClaimClass)> = Vec::with_capacity(spans.len());
        for span in spans {
            if kept.last().is_some_and(|last| span.0 < last.1) {
                continue;
            }
            kept.push(span);
        }
        kept
    }

    /// Validate every memory claim in `response`.
    ///
    /// `valid` is false iff some claim's referent is in neither the session
    /// topic index nor the profile's discussion log. An empty session can
    /// only be rescued by the profile.
    pub fn validate(
        &self,
        response: &str,
        session: &SessionContext,
        profile: Option<&UserProfile>,
    ) -> MemoryValidationResult {
        let min_len = session.config().min_token_len;
        let mut result = MemoryValidationResult::inconclusive();

        for (start, end, class) in self.find_claims(response) {
            let topic =
                referent::extract_topic(response, start, end, min_len, self.config.max_topic_words);
            let verified = match topic.as_deref() {
                Some(t) => {
                    (!session.is_empty() && session.has_discussed_topic(t))
                        || profile.is_some_and(|p| profile_discussed(p, t, min_len))
                }
                None => session.has_assistant_turn(),
            };

            let matched = &response[start..end];
            if !verified {
                debug!(
                    user_id = %session.user_id(),
                    claim = %matched,
                    topic = topic.as_deref().unwrap_or(""),
                    "memory claim has no referent"
                );
                result
                    .corrections
                    .push(generate_honest_alternative(topic.as_deref().unwrap_or("that")));
            }

            result.claims.push(MemoryClaim {
                start,
                end,
                matched_text: matched.to_string(),
                class,
                topic,
                verified,
            });
        }

        result.valid = result.claims.iter().all(|c| c.verified);
        result
    }
}

/// Whether the profile's discussion log names `topic`: every content word of
/// `topic` matches a word of one logged entry.
fn profile_discussed(profile: &UserProfile, topic: &str, min_len: usize) -> bool {
    let query = topics::content_words(topic, min_len);
    if query.is_empty() {
        return false;
    }
    profile.discussed_topics.iter().any(|entry| {
        let logged = topics::content_words(entry, min_len);
        query
            .iter()
            .all(|q| logged.iter().any(|w| topics::term_matches(&w.text, &q.text)))
    })
}
