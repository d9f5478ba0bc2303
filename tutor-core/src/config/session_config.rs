use serde::{Deserialize, Serialize};

use super::defaults;

/// Session history and topic index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum retained messages per session (FIFO eviction).
    pub max_messages: usize,
    /// Maximum topics kept in a session's topic index.
    pub max_topics: usize,
    /// Tokens shorter than this are never indexed.
    pub min_token_len: usize,
    /// Longest n-gram indexed (1 = single words only).
    pub max_ngram: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_messages: defaults::DEFAULT_MAX_MESSAGES,
            max_topics: defaults::DEFAULT_MAX_TOPICS,
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            max_ngram: defaults::DEFAULT_MAX_NGRAM,
        }
    }
}
