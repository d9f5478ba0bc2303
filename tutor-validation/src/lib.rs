//! # tutor-validation
//!
//! Detects responses that claim shared memory the session cannot back up,
//! and rewrites those claims as honest offers to cover the topic now.
//!
//! ## Pipeline
//! 1. **Catalogue**: data table of claim phrases and their class
//! 2. **Referent**: nearby topic words within the claim's sentence
//! 3. **Verification**: session topic index, then profile discussion log
//! 4. **Correction**: sentence-level replacement with an honest alternative

pub mod catalogue;
pub mod correction;
pub mod referent;
pub mod validator;

pub use catalogue::{ClaimPattern, DEFAULT_CLAIM_PATTERNS};
pub use correction::{apply_corrections, generate_honest_alternative};
pub use validator::MemoryClaimValidator;
