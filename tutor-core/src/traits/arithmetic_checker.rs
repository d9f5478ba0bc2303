use crate::models::MathValidationResult;

/// Checks `lhs = rhs` statements in free text and proposes corrected text.
pub trait IArithmeticChecker: Send + Sync {
    fn validate_and_annotate(&self, text: &str) -> MathValidationResult;
}
