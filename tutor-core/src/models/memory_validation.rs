use serde::{Deserialize, Serialize};

/// Linguistic family of a memory claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimClass {
    /// "we discussed", "we covered".
    PriorDiscussion,
    /// "last time", "in our last session".
    PriorSession,
    /// "you mentioned", "you told me".
    UserStatement,
    /// "as I said before", "like I said".
    SelfReference,
    /// "remember when", "as you'll recall".
    Recall,
}

/// A memory claim found in a candidate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryClaim {
    /// Byte offset where the matched phrase starts.
    pub start: usize,
    /// Byte offset one past the matched phrase.
    pub end: usize,
    pub matched_text: String,
    pub class: ClaimClass,
    /// Referent topic, if one could be extracted.
    pub topic: Option<String>,
    /// Whether the session or profile backs the claim.
    pub verified: bool,
}

/// Outcome of memory-claim validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryValidationResult {
    pub valid: bool,
    pub claims: Vec<MemoryClaim>,
    /// One honest alternative per unverified claim.
    pub corrections: Vec<String>,
}

impl MemoryValidationResult {
    /// A result that makes no claim either way.
    pub fn inconclusive() -> Self {
        Self {
            valid: true,
            claims: Vec::new(),
            corrections: Vec::new(),
        }
    }

    pub fn unverified_claims(&self) -> impl Iterator<Item = &MemoryClaim> {
        self.claims.iter().filter(|c| !c.verified)
    }
}
