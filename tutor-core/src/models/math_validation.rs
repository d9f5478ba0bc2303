use serde::{Deserialize, Serialize};

/// A `lhs = rhs` assertion extracted from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathStatement {
    /// Left-hand expression as written.
    pub lhs: String,
    /// Right-hand literal as written.
    pub rhs: String,
    /// Byte offset of the statement start.
    pub start: usize,
    /// Byte offset one past the right-hand literal.
    pub end: usize,
    /// Byte offset of the right-hand literal.
    pub rhs_start: usize,
}

/// Outcome of scanning a text for arithmetic statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathValidationResult {
    pub valid: bool,
    pub issues: Vec<String>,
    pub has_issues: bool,
    /// Statements that parsed and were evaluated.
    pub statements_checked: usize,
    /// Candidates that looked like statements but did not parse.
    pub statements_skipped: usize,
    /// Input text with wrong right-hand sides replaced, when any were wrong.
    pub corrected_text: Option<String>,
}

impl MathValidationResult {
    /// A result that makes no claim either way.
    pub fn inconclusive() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
            has_issues: false,
            statements_checked: 0,
            statements_skipped: 0,
            corrected_text: None,
        }
    }
}

/// One partial-evaluation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionStep {
    /// The expression after this step's reduction.
    pub expression: String,
    /// Value produced by the operation reduced in this step.
    pub result: f64,
}
