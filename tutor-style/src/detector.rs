//! LearningStyleDetector: scores recent user text against the keyword table.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use tutor_core::config::StyleConfig;
use tutor_core::models::{LearningDimension, LearningStyleProfile};
use tutor_session::SessionContext;

use crate::keywords::{StyleKeyword, DEFAULT_KEYWORDS};

#[derive(Debug, Clone)]
struct CompiledKeyword {
    regex: Regex,
    dimension: LearningDimension,
    weight: f64,
}

fn compile(keywords: &[StyleKeyword]) -> Result<Vec<CompiledKeyword>, regex::Error> {
    keywords
        .iter()
        .map(|k| {
            let body = k
                .pattern
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            Ok(CompiledKeyword {
                regex: Regex::new(&format!(r"(?i)\b{body}\b"))?,
                dimension: k.dimension,
                weight: k.weight,
            })
        })
        .collect()
}

static DEFAULT_COMPILED: LazyLock<Vec<CompiledKeyword>> =
    LazyLock::new(|| compile(DEFAULT_KEYWORDS).unwrap());

/// Keyword-driven learning-style estimator.
#[derive(Debug, Clone)]
pub struct LearningStyleDetector {
    keywords: Vec<CompiledKeyword>,
    config: StyleConfig,
}

impl LearningStyleDetector {
    pub fn new(config: StyleConfig) -> Self {
        Self {
            keywords: DEFAULT_COMPILED.clone(),
            config,
        }
    }

    /// Use a custom keyword table instead of the built-in one.
    pub fn with_keywords(
        keywords: &[StyleKeyword],
        config: StyleConfig,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            keywords: compile(keywords)?,
            config,
        })
    }

    /// Score the session's most recent user messages.
    pub fn estimate(&self, session: &SessionContext) -> LearningStyleProfile {
        let user_messages: Vec<_> = session
            .get_all_messages()
            .into_iter()
            .filter(|m| m.is_user())
            .collect();
        let skip = user_messages.len().saturating_sub(self.config.window);

        let mut profile = LearningStyleProfile::default();
        for message in user_messages.into_iter().skip(skip) {
            self.accumulate(&message.content, &mut profile);
        }
        trace!(user_id = %session.user_id(), ?profile, "learning style estimated");
        profile
    }

    /// Score a single piece of text.
    pub fn estimate_text(&self, text: &str) -> LearningStyleProfile {
        let mut profile = LearningStyleProfile::default();
        self.accumulate(text, &mut profile);
        profile
    }

    /// Every occurrence counts, including repeats within one message.
    fn accumulate(&self, text: &str, profile: &mut LearningStyleProfile) {
        for keyword in &self.keywords {
            let hits = keyword.regex.find_iter(text).count();
            if hits > 0 {
                profile.add(keyword.dimension, keyword.weight * hits as f64);
            }
        }
    }
}

impl Default for LearningStyleDetector {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

/// Dimensions sharing the highest non-zero score, in canonical order.
pub fn dominant_styles(profile: &LearningStyleProfile) -> Vec<LearningDimension> {
    let top = profile.max_score();
    if top <= 0.0 {
        return Vec::new();
    }
    LearningDimension::ALL
        .into_iter()
        .filter(|d| (profile.score(*d) - top).abs() < f64::EPSILON)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_keywords() {
        let detector = LearningStyleDetector::default();
        let profile = detector.estimate_text("A diagram, another DIAGRAM, and a picture.");
        assert_eq!(profile.visual, 3.0);
        assert_eq!(profile.auditory, 0.0);
    }

    #[test]
    fn multi_word_patterns_tolerate_whitespace() {
        let detector = LearningStyleDetector::default();
        let profile = detector.estimate_text("Could you explain   out loud?");
        assert_eq!(profile.auditory, 1.5);
    }

    #[test]
    fn word_boundaries_prevent_partial_hits() {
        let detector = LearningStyleDetector::default();
        // "already" must not count as "read"; "reading" counts once.
        let profile = detector.estimate_text("I already finished the reading");
        assert_eq!(profile.reading, 1.0);
    }

    #[test]
    fn no_keywords_yields_zero_profile() {
        let profile = LearningStyleDetector::default().estimate_text("What is 7 times 8?");
        assert!(profile.is_zero());
        assert!(dominant_styles(&profile).is_empty());
    }

    #[test]
    fn dominant_styles_reports_ties() {
        let profile = LearningStyleProfile {
            visual: 2.0,
            auditory: 0.0,
            kinesthetic: 2.0,
            reading: 1.0,
        };
        assert_eq!(
            dominant_styles(&profile),
            vec![LearningDimension::Visual, LearningDimension::Kinesthetic]
        );
    }

    #[test]
    fn custom_table() {
        let table = [StyleKeyword {
            pattern: "flashcards",
            dimension: LearningDimension::Reading,
            weight: 2.0,
        }];
        let detector = LearningStyleDetector::with_keywords(&table, StyleConfig::default()).unwrap();
        assert_eq!(detector.estimate_text("flashcards please").reading, 2.0);
        assert_eq!(detector.estimate_text("a diagram").visual, 0.0);
    }
}
