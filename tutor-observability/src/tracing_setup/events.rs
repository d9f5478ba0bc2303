//! Structured log events for integrity checks.
//!
//! Each function emits a `tracing` event with structured fields.

/// A memory claim had no referent in the session or profile.
pub fn claim_rejected(user_id: &str, claim: &str, topic: Option<&str>) {
    tracing::info!(
        event = "claim_rejected",
        user_id = %user_id,
        claim = %claim,
        topic = topic.unwrap_or(""),
        "memory claim rejected"
    );
}

/// An arithmetic statement in a response was wrong.
pub fn math_mismatch(user_id: &str, issue: &str) {
    tracing::info!(
        event = "math_mismatch",
        user_id = %user_id,
        issue = %issue,
        "math mismatch corrected"
    );
}

/// A validator panicked; its verdict was treated as inconclusive.
pub fn validator_fault(user_id: &str, component: &str, reason: &str) {
    tracing::error!(
        event = "validator_fault",
        user_id = %user_id,
        component = %component,
        reason = %reason,
        "validator fault, falling back to inconclusive"
    );
}

/// The profile store failed; the turn proceeds without a profile.
pub fn profile_lookup_failed(user_id: &str, error: &str) {
    tracing::warn!(
        event = "profile_lookup_failed",
        user_id = %user_id,
        error = %error,
        "profile lookup failed"
    );
}

/// A turn finished post-processing.
pub fn turn_completed(user_id: &str, corrections: usize, total_micros: u64) {
    tracing::debug!(
        event = "turn_completed",
        user_id = %user_id,
        corrections = corrections,
        total_micros = total_micros,
        "turn completed"
    );
}
