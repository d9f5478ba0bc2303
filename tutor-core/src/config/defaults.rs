//! Compiled defaults shared by every config section.

pub const DEFAULT_MAX_MESSAGES: usize = 50;
pub const DEFAULT_MAX_TOPICS: usize = 500;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
pub const DEFAULT_MAX_NGRAM: usize = 2;

pub const DEFAULT_MAX_TOPIC_WORDS: usize = 3;

pub const DEFAULT_MATH_EPSILON: f64 = 1e-9;
/// Single-level parenthesized sub-expressions only.
pub const DEFAULT_MAX_PAREN_DEPTH: usize = 1;

pub const DEFAULT_STYLE_WINDOW: usize = 20;

pub const DEFAULT_PROFILE_LOOKUP: bool = true;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
