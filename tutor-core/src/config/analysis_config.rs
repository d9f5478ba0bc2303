use serde::{Deserialize, Serialize};

use super::defaults;

/// Memory-claim validation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Maximum words taken as a claim's referent topic.
    pub max_topic_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_topic_words: defaults::DEFAULT_MAX_TOPIC_WORDS,
        }
    }
}

/// Math statement validation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Absolute tolerance for decimal comparisons.
    pub epsilon: f64,
    /// Deepest parenthesis nesting the parser accepts. Deeper statements are skipped.
    pub max_paren_depth: usize,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            epsilon: defaults::DEFAULT_MATH_EPSILON,
            max_paren_depth: defaults::DEFAULT_MAX_PAREN_DEPTH,
        }
    }
}

/// Learning-style detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Number of most recent user messages scanned.
    pub window: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_STYLE_WINDOW,
        }
    }
}
