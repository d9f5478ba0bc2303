//! Scan free text for `lhs = rhs` candidates.

use std::sync::LazyLock;

use regex::Regex;

use tutor_core::constants::MAX_STATEMENT_LEN;
use tutor_core::models::MathStatement;

/// `lhs` starts at a digit, `.digit`, or `(`; `rhs` is a single literal,
/// optionally grouped in thousands (`12,000`).
static STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<lhs>(?:\d|\.\d|\()[0-9.\s()+\-*/×÷·\x{2212}]*?)\s*=\s*(?P<rhs>[-\x{2212}]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)",
    )
    .unwrap()
});

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '×' | '÷' | '·' | '\u{2212}' | '=' | '^')
}

/// Whether the text before `start` means the candidate is a fragment of a
/// larger expression (`x + 2 = 5`, `1,000 + 5 = ...`).
fn preceded_by_expression(text: &str, start: usize) -> bool {
    let before = &text[..start];
    let mut rev = before.chars().rev();
    match rev.next() {
        None => return false,
        Some(c) if c.is_alphanumeric() || c == '_' || c == ')' || c == '.' => return true,
        Some(',') if rev.next().is_some_and(|c| c.is_ascii_digit()) => return true,
        _ => {}
    }
    // Markdown emphasis and inline-math delimiters are not operators.
    before
        .trim_end()
        .trim_end_matches(['`', '$'])
        .trim_end_matches("**")
        .chars()
        .next_back()
        .is_some_and(is_operator)
}

/// Whether the text after `end` continues the right-hand side (`= 5 + 1`,
/// `= 12x`, `= 4%`, `= 12,00`).
fn followed_by_expression(text: &str, end: usize) -> bool {
    let after = &text[end..];
    let mut chars = after.chars();
    match chars.next() {
        Some(c) if c.is_alphanumeric() || c == '%' || c == '_' || c == '(' => return true,
        Some(',' | '.') if chars.next().is_some_and(|c| c.is_ascii_digit()) => return true,
        _ => {}
    }
    let mut rest = after.trim_start().chars();
    match rest.next() {
        Some(c) if is_operator(c) => rest
            .find(|c| !c.is_whitespace())
            .is_some_and(|c| c.is_ascii_digit() || c == '(' || c == '.'),
        _ => false,
    }
}

/// Drop leading `(` that have no matching `)` inside the lhs.
fn balance_leading_parens(lhs: &str) -> usize {
    let opens = lhs.matches('(').count();
    let closes = lhs.matches(')').count();
    let mut surplus = opens.saturating_sub(closes);
    let mut skip = 0;
    for (idx, ch) in lhs.char_indices() {
        if surplus == 0 {
            break;
        }
        match ch {
            '(' => {
                surplus -= 1;
                skip = idx + ch.len_utf8();
            }
            c if c.is_whitespace() => skip = idx + c.len_utf8(),
            _ => break,
        }
    }
    skip
}

/// Extract candidate statements in order of appearance.
///
/// Candidates embedded in larger algebraic expressions are ignored; the
/// returned statements may still fail to parse.
pub fn extract_statements(text: &str) -> Vec<MathStatement> {
    let mut out = Vec::new();
    for caps in STATEMENT_RE.captures_iter(text) {
        let (Some(lhs_m), Some(rhs_m)) = (caps.name("lhs"), caps.name("rhs")) else {
            continue;
        };
        let skip = balance_leading_parens(lhs_m.as_str());
        let start = lhs_m.start() + skip;
        let lhs = text[start..lhs_m.end()].trim();

        if lhs.is_empty() || lhs.len() > MAX_STATEMENT_LEN {
            continue;
        }
        if preceded_by_expression(text, start) || followed_by_expression(text, rhs_m.end()) {
            continue;
        }

        out.push(MathStatement {
            lhs: lhs.to_string(),
            rhs: rhs_m.as_str().replace('\u{2212}', "-"),
            start,
            end: rhs_m.end(),
            rhs_start: rhs_m.start(),
        });
    }
    out
}
