//! Honest alternatives and sentence-level rewriting of unverified claims.

use tutor_core::models::MemoryValidationResult;

use crate::referent::sentence_bounds;

/// A reply that offers to cover `topic` without claiming any shared history.
pub fn generate_honest_alternative(topic: &str) -> String {
    let topic = topic.trim();
    let topic = if topic.is_empty() { "that" } else { topic };
    format!("I don't have a record of us discussing {topic} before. Would you like to go over it now?")
}

/// Replace each sentence holding an unverified claim with that claim's
/// honest alternative. Returns `response` unchanged when every claim holds.
pub fn apply_corrections(response: &str, result: &MemoryValidationResult) -> String {
    let mut sentences: Vec<(usize, usize, String)> = Vec::new();
    for claim in result.unverified_claims() {
        let (start, end) = sentence_bounds(response, claim.start, claim.end);
        if sentences.last().is_some_and(|last| start < last.1) {
            continue;
        }
        let alternative = generate_honest_alternative(claim.topic.as_deref().unwrap_or("that"));
        sentences.push((start, end, alternative));
    }

    let mut corrected = response.to_string();
    for (start, end, alternative) in sentences.into_iter().rev() {
        corrected.replace_range(start..end, &alternative);
    }
    corrected
}
