//! Span definitions for the two middleware phases.

/// Create a pre-processing span.
#[macro_export]
macro_rules! pre_process_span {
    ($user_id:expr) => {
        tracing::info_span!("tutor.pre_process", user_id = %$user_id)
    };
}

/// Create a post-processing span.
#[macro_export]
macro_rules! post_process_span {
    ($user_id:expr, $response_len:expr) => {
        tracing::info_span!(
            "tutor.post_process",
            user_id = %$user_id,
            response_len = $response_len
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PRE_PROCESS: &str = "tutor.pre_process";
    pub const POST_PROCESS: &str = "tutor.post_process";
}
