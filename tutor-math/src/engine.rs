//! MathEngine: validates arithmetic statements and produces solution steps.

use tracing::debug;

use tutor_core::config::MathConfig;
use tutor_core::errors::MathError;
use tutor_core::models::{MathStatement, MathValidationResult};
use tutor_core::traits::IArithmeticChecker;

use crate::extraction;
use crate::lexer;
use crate::number::format_number;
use crate::parser::{self, Expr};
use crate::steps::SolutionSteps;

/// Relative slack for binary floating-point representation of decimal literals.
const REPRESENTATION_SLACK: f64 = 1e-12;

/// Verdict on a single parsed statement.
#[derive(Debug, Clone, PartialEq)]
enum Verdict {
    Correct,
    Wrong { correct: String },
    Undefined,
}

/// Arithmetic checker for free text.
#[derive(Debug, Clone, Default)]
pub struct MathEngine {
    config: MathConfig,
}

impl MathEngine {
    pub fn new(config: MathConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MathConfig {
        &self.config
    }

    fn parse(&self, expression: &str) -> Result<(Vec<lexer::Token>, Expr), MathError> {
        let tokens = lexer::tokenize(expression)?;
        let expr = parser::parse(&tokens, self.config.max_paren_depth)?;
        Ok((tokens, expr))
    }

    /// Evaluate an expression with standard precedence.
    pub fn evaluate(&self, expression: &str) -> Result<f64, MathError> {
        self.parse(expression)?.1.eval()
    }

    /// Candidate statements in `text`, before parsing.
    pub fn extract_statements(&self, text: &str) -> Vec<MathStatement> {
        extraction::extract_statements(text)
    }

    /// Check every complete `lhs = rhs` statement in `text`.
    ///
    /// Statements that fail to parse are skipped without a verdict, so text
    /// with no parseable statement is reported valid.
    pub fn validate_and_annotate(&self, text: &str) -> MathValidationResult {
        let mut result = MathValidationResult::inconclusive();
        let mut replacements: Vec<(usize, usize, String)> = Vec::new();

        for statement in self.extract_statements(text) {
            let expr = match self.parse(&statement.lhs) {
                Ok((_, expr)) if expr.operation_count() > 0 => expr,
                Ok(_) => continue,
                Err(e) => {
                    debug!(lhs = %statement.lhs, error = %e, "math statement skipped");
                    result.statements_skipped += 1;
                    continue;
                }
            };
            let Ok(stated) = statement.rhs.replace(',', "").parse::<f64>() else {
                result.statements_skipped += 1;
                continue;
            };
            result.statements_checked += 1;

            match self.judge(&expr, stated) {
                Verdict::Correct => {}
                Verdict::Wrong { correct } => {
                    debug!(
                        lhs = %statement.lhs,
                        stated = %statement.rhs,
                        correct = %correct,
                        "math mismatch"
                    );
                    result.issues.push(format!(
                        "{} = {} is incorrect; the correct value is {}",
                        statement.lhs, statement.rhs, correct
                    ));
                    replacements.push((statement.rhs_start, statement.end, correct));
                }
                Verdict::Undefined => {
                    result.issues.push(format!(
                        "{} = {} is incorrect; {} is undefined because it divides by zero",
                        statement.lhs, statement.rhs, statement.lhs
                    ));
                    replacements.push((statement.rhs_start, statement.end, "undefined".to_string()));
                }
            }
        }

        result.has_issues = !result.issues.is_empty();
        result.valid = !result.has_issues;
        if !replacements.is_empty() {
            let mut corrected = text.to_string();
            for (start, end, value) in replacements.into_iter().rev() {
                corrected.replace_range(start..end, &value);
            }
            result.corrected_text = Some(corrected);
        }
        result
    }

    /// Any stated value further than `epsilon` from the evaluated one is
    /// wrong, whether the literal is an integer or a decimal.
    fn judge(&self, expr: &Expr, stated: f64) -> Verdict {
        let actual = match expr.eval() {
            Ok(v) => v,
            Err(_) => return Verdict::Undefined,
        };
        let scale = actual.abs().max(stated.abs()).max(1.0);
        let tolerance = self.config.epsilon.max(REPRESENTATION_SLACK * scale);
        if (actual - stated).abs() <= tolerance {
            Verdict::Correct
        } else {
            Verdict::Wrong {
                correct: format_number(actual),
            }
        }
    }

    /// Decompose an expression into one-shot partial-evaluation steps.
    ///
    /// The whole expression is evaluated up front, so iteration cannot fail.
    pub fn solve_and_show_steps(&self, expression: &str) -> Result<SolutionSteps, MathError> {
        let (tokens, expr) = self.parse(expression)?;
        expr.eval()?;
        Ok(SolutionSteps::new(tokens))
    }
}

impl IArithmeticChecker for MathEngine {
    fn validate_and_annotate(&self, text: &str) -> MathValidationResult {
        MathEngine::validate_and_annotate(self, text)
    }
}
