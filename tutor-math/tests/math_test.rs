use proptest::prelude::*;
use tutor_core::config::MathConfig;
use tutor_core::errors::MathError;
use tutor_math::MathEngine;

// ── Scenarios ─────────────────────────────────────────────────────────────

#[test]
fn correct_statement_is_valid() {
    let result = MathEngine::default().validate_and_annotate("2 + 2 = 4");
    assert!(result.valid);
    assert!(!result.has_issues);
    assert!(result.issues.is_empty());
    assert_eq!(result.statements_checked, 1);
    assert!(result.corrected_text.is_none());
}

#[test]
fn wrong_product_reports_correct_value() {
    let result = MathEngine::default().validate_and_annotate("3 * 4 = 13");
    assert!(!result.valid);
    assert!(result.has_issues);
    assert_eq!(result.issues.len(), 1);
    assert!(result.issues[0].contains("12"), "issue: {}", result.issues[0]);
    assert_eq!(result.corrected_text.as_deref(), Some("3 * 4 = 12"));
}

#[test]
fn unicode_operator_message_format() {
    let result = MathEngine::default().validate_and_annotate("So 3 × 4 = 13, right?");
    assert_eq!(
        result.issues,
        vec!["3 × 4 = 13 is incorrect; the correct value is 12".to_string()]
    );
    assert_eq!(result.corrected_text.as_deref(), Some("So 3 × 4 = 12, right?"));
}

#[test]
fn multiple_statements_corrected_inline() {
    let text = "First 2 + 3 = 6, then 6 * 2 = 12, finally 10 - 4 = 5.";
    let result = MathEngine::default().validate_and_annotate(text);
    assert_eq!(result.statements_checked, 3);
    assert_eq!(result.issues.len(), 2);
    assert_eq!(
        result.corrected_text.as_deref(),
        Some("First 2 + 3 = 5, then 6 * 2 = 12, finally 10 - 4 = 6.")
    );
}

#[test]
fn decimals_compare_within_epsilon() {
    let engine = MathEngine::default();
    assert!(engine.validate_and_annotate("0.1 + 0.2 = 0.3").valid);
    assert!(engine.validate_and_annotate("10 / 4 = 2.5").valid);
    assert!(!engine.validate_and_annotate("10 / 3 = 3.5").valid);
    // Integer right-hand sides are exact.
    let result = engine.validate_and_annotate("7 / 2 = 3");
    assert!(!result.valid);
    assert!(result.issues[0].contains("3.5"));
}

#[test]
fn rounded_decimal_answers_are_wrong() {
    let engine = MathEngine::default();
    let result = engine.validate_and_annotate("0.15 + 0.1 = 0.2");
    assert!(!result.valid);
    assert!(result.has_issues);
    assert_eq!(
        result.issues,
        vec!["0.15 + 0.1 = 0.2 is incorrect; the correct value is 0.25".to_string()]
    );
    assert_eq!(result.corrected_text.as_deref(), Some("0.15 + 0.1 = 0.25"));

    assert!(!engine.validate_and_annotate("2.55 + 0.01 = 2.6").valid);
    assert!(!engine.validate_and_annotate("10 / 3 = 3.33").valid);
}

#[test]
fn thousands_separator_on_rhs() {
    let engine = MathEngine::default();
    let text = "500 × 24 = 12,000 pages in total.";
    let result = engine.validate_and_annotate(text);
    assert!(result.valid);
    assert!(!result.has_issues);
    assert_eq!(result.statements_checked, 1);
    assert!(result.corrected_text.is_none());

    let wrong = engine.validate_and_annotate("500 × 24 = 13,000 pages in total.");
    assert!(!wrong.valid);
    assert_eq!(
        wrong.issues,
        vec!["500 × 24 = 13,000 is incorrect; the correct value is 12000".to_string()]
    );
    assert_eq!(
        wrong.corrected_text.as_deref(),
        Some("500 × 24 = 12000 pages in total.")
    );
}

#[test]
fn broken_grouping_makes_no_claim() {
    let result = MathEngine::default().validate_and_annotate("500 × 24 = 12,00 pages");
    assert!(result.valid);
    assert_eq!(result.statements_checked, 0);
    assert!(result.corrected_text.is_none());
}

#[test]
fn division_by_zero_is_an_issue() {
    let result = MathEngine::default().validate_and_annotate("5 / 0 = 0");
    assert!(!result.valid);
    assert!(result.issues[0].contains("undefined"));
}

#[test]
fn unparseable_statements_are_skipped_not_failed() {
    let engine = MathEngine::default();
    // Nested deeper than the default single level.
    let result = engine.validate_and_annotate("((1 + 2) * 3) = 10");
    assert!(result.valid);
    assert_eq!(result.statements_checked, 0);
    assert_eq!(result.statements_skipped, 1);

    // Raising the depth limit turns the skip into a verdict.
    let deep = MathEngine::new(MathConfig {
        max_paren_depth: 2,
        ..MathConfig::default()
    });
    assert!(!deep.validate_and_annotate("((1 + 2) * 3) = 10").valid);
}

#[test]
fn prose_without_statements_is_valid() {
    let result = MathEngine::default().validate_and_annotate("Photosynthesis makes sugar.");
    assert!(result.valid);
    assert_eq!(result.statements_checked, 0);
}

#[test]
fn single_level_parentheses_are_supported() {
    let engine = MathEngine::default();
    assert!(engine.validate_and_annotate("(2 + 3) × 4 = 20").valid);
    assert!(!engine.validate_and_annotate("2 + 3 × 4 = 20").valid);
}

// ── Steps ─────────────────────────────────────────────────────────────────

#[test]
fn steps_end_with_the_answer() {
    let engine = MathEngine::default();
    let steps: Vec<_> = engine.solve_and_show_steps("(8 - 2) / 3 + 1").unwrap().collect();
    let exprs: Vec<&str> = steps.iter().map(|s| s.expression.as_str()).collect();
    assert_eq!(exprs, vec!["6 / 3 + 1", "2 + 1", "3"]);
    assert_eq!(steps.last().unwrap().result, engine.evaluate("(8 - 2) / 3 + 1").unwrap());
}

#[test]
fn steps_reject_invalid_expressions() {
    let engine = MathEngine::default();
    assert_eq!(
        engine.solve_and_show_steps("4 / (2 - 2)").unwrap_err(),
        MathError::DivisionByZero
    );
    assert!(engine.solve_and_show_steps("2 +").is_err());
}

// ── Soundness ─────────────────────────────────────────────────────────────

fn op_symbol(idx: usize) -> char {
    ['+', '-', '*', '×'][idx % 4]
}

fn apply(a: i64, op: char, b: i64) -> i64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        _ => a * b,
    }
}

proptest! {
    #[test]
    fn correct_integer_statements_validate(a in 0i64..1000, b in 0i64..1000, op in 0usize..4) {
        let op = op_symbol(op);
        let text = format!("We get {a} {op} {b} = {}.", apply(a, op, b));
        let result = MathEngine::default().validate_and_annotate(&text);
        prop_assert!(result.valid, "{}: {:?}", text, result.issues);
        prop_assert!(!result.has_issues);
    }

    #[test]
    fn wrong_integer_statements_fail(a in 0i64..1000, b in 0i64..1000, op in 0usize..4, delta in 1i64..50) {
        let op = op_symbol(op);
        let text = format!("We get {a} {op} {b} = {}.", apply(a, op, b) + delta);
        let result = MathEngine::default().validate_and_annotate(&text);
        prop_assert!(!result.valid, "{}", text);
        prop_assert!(!result.issues.is_empty());
    }

    #[test]
    fn steps_agree_with_evaluation(a in 1i64..100, b in 1i64..100, c in 1i64..100) {
        let engine = MathEngine::default();
        let expr = format!("({a} + {b}) * {c} - {a}");
        let last = engine.solve_and_show_steps(&expr).unwrap().last().unwrap();
        prop_assert_eq!(last.result, engine.evaluate(&expr).unwrap());
    }
}
