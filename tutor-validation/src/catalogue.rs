//! Memory-claim phrase catalogue.
//!
//! Each row is a case-insensitive regex fragment matched on word boundaries.
//! Longer phrasings of the same claim come first so they win overlaps.

use tutor_core::models::ClaimClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimPattern {
    pub pattern: &'static str,
    pub class: ClaimClass,
}

const fn claim(pattern: &'static str, class: ClaimClass) -> ClaimPattern {
    ClaimPattern { pattern, class }
}

use ClaimClass::{PriorDiscussion, PriorSession, Recall, SelfReference, UserStatement};

pub const DEFAULT_CLAIM_PATTERNS: &[ClaimPattern] = &[
    // prior discussion
    claim(r"we(?:['’]ve| have)? (?:already |previously )?discussed", PriorDiscussion),
    claim(r"we(?:['’]ve| have)? (?:already |previously )?talked about", PriorDiscussion),
    claim(r"we(?:['’]ve| have)? (?:already |previously )?covered", PriorDiscussion),
    claim(r"we(?:['’]ve| have)? (?:already )?(?:went|gone) over", PriorDiscussion),
    claim(r"our (?:earlier|previous|last) (?:discussion|conversation|chat) (?:about|on)", PriorDiscussion),
    // prior session
    claim(r"last time,? we (?:discussed|talked about|covered|went over|looked at|worked on)", PriorSession),
    claim(r"last time", PriorSession),
    claim(r"in our (?:last|previous|earlier) (?:session|lesson|conversation|chat)", PriorSession),
    claim(r"(?:yesterday|last week),? we (?:discussed|talked about|covered|went over|looked at|worked on)", PriorSession),
    claim(r"as we saw (?:earlier|before|previously)", PriorSession),
    // user statements
    claim(r"you (?:mentioned|told me|said|asked about)(?: earlier| before| previously)?(?: that)?", UserStatement),
    // self reference
    claim(r"as i (?:said|mentioned|explained)(?: before| earlier| previously)?", SelfReference),
    claim(r"like i said(?: before| earlier)?", SelfReference),
    // recall
    claim(r"remember when", Recall),
    claim(r"as you(?:['’]ll| will| may)? recall", Recall),
    claim(r"you may recall", Recall),
    claim(r"as you remember", Recall),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_is_represented() {
        for class in [PriorDiscussion, PriorSession, UserStatement, SelfReference, Recall] {
            assert!(DEFAULT_CLAIM_PATTERNS.iter().any(|p| p.class == class));
        }
    }

    #[test]
    fn all_patterns_compile() {
        for p in DEFAULT_CLAIM_PATTERNS {
            assert!(regex::Regex::new(p.pattern).is_ok(), "{}", p.pattern);
        }
    }
}
