/// Tutor middleware version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on `session.max_messages`, regardless of configuration.
pub const MAX_SESSION_MESSAGES: usize = 10_000;

/// Hard ceiling on the number of topics a single session may index.
pub const MAX_TOPIC_INDEX_SIZE: usize = 50_000;

/// Longest candidate span (in bytes) the math scanner will try to parse.
pub const MAX_STATEMENT_LEN: usize = 256;

/// Environment variable used for log filtering.
pub const LOG_ENV_VAR: &str = "TUTOR_LOG";
