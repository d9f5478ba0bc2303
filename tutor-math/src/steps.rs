//! One-shot, step-by-step reduction of an expression.
//!
//! Each step reduces exactly one binary operation: innermost parentheses
//! first, then `*`/`/` left to right, then `+`/`-` left to right.

use tutor_core::models::SolutionStep;

use crate::lexer::Token;

/// Iterator over partial-evaluation steps. Consumed once; not restartable.
#[derive(Debug)]
pub struct SolutionSteps {
    tokens: Vec<Token>,
    emitted: usize,
    finished: bool,
}

impl SolutionSteps {
    /// Build from a token stream that has already parsed and evaluated cleanly.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            emitted: 0,
            finished: false,
        }
    }

    /// Current (partially reduced) expression.
    fn render(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&Token> = None;
        for token in &self.tokens {
            let tight = matches!(prev, None | Some(Token::LParen)) || *token == Token::RParen;
            if !tight {
                out.push(' ');
            }
            out.push_str(&token.to_string());
            prev = Some(token);
        }
        out
    }

    /// Replace every `( n )` with `n`.
    fn drop_redundant_parens(&mut self) {
        let mut i = 0;
        while i + 2 < self.tokens.len() {
            if let (Token::LParen, Token::Num(v), Token::RParen) =
                (self.tokens[i], self.tokens[i + 1], self.tokens[i + 2])
            {
                self.tokens.splice(i..i + 3, [Token::Num(v)]);
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
    }

    /// Token range `[start, end)` of the innermost parenthesized group,
    /// or the whole expression when no parentheses remain.
    fn innermost_group(&self) -> (usize, usize) {
        match self.tokens.iter().position(|t| *t == Token::RParen) {
            Some(close) => {
                let open = self.tokens[..close]
                    .iter()
                    .rposition(|t| *t == Token::LParen)
                    .unwrap_or(0);
                (open + 1, close)
            }
            None => (0, self.tokens.len()),
        }
    }

    /// Index of the operator to reduce next within `[start, end)`.
    fn next_operator(&self, start: usize, end: usize) -> Option<usize> {
        let group = &self.tokens[start..end];
        group
            .iter()
            .position(|t| t.as_op().is_some_and(|op| op.is_multiplicative()))
            .or_else(|| group.iter().position(|t| t.as_op().is_some()))
            .map(|idx| start + idx)
    }
}

impl Iterator for SolutionSteps {
    type Item = SolutionStep;

    fn next(&mut self) -> Option<SolutionStep> {
        if self.finished {
            return None;
        }
        self.drop_redundant_parens();

        if self.tokens.len() == 1 {
            self.finished = true;
            let value = self.tokens[0].as_num()?;
            if self.emitted > 0 {
                return None;
            }
            self.emitted += 1;
            return Some(SolutionStep {
                expression: self.render(),
                result: value,
            });
        }

        let (start, end) = self.innermost_group();
        let Some(idx) = self.next_operator(start, end) else {
            self.finished = true;
            return None;
        };
        let (Some(lhs), Some(op), Some(rhs)) = (
            idx.checked_sub(1).and_then(|i| self.tokens[i].as_num()),
            self.tokens[idx].as_op(),
            self.tokens.get(idx + 1).and_then(Token::as_num),
        ) else {
            self.finished = true;
            return None;
        };

        let result = op.apply(lhs, rhs).unwrap_or(f64::NAN);
        self.tokens.splice(idx - 1..idx + 2, [Token::Num(result)]);
        self.drop_redundant_parens();
        if self.tokens.len() == 1 {
            self.finished = true;
        }

        self.emitted += 1;
        Some(SolutionStep {
            expression: self.render(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn steps(input: &str) -> Vec<SolutionStep> {
        SolutionSteps::new(tokenize(input).unwrap()).collect()
    }

    #[test]
    fn parentheses_then_multiplication_then_addition() {
        let s = steps("2 + 3 * (4 - 1)");
        let exprs: Vec<&str> = s.iter().map(|st| st.expression.as_str()).collect();
        assert_eq!(exprs, vec!["2 + 3 * 3", "2 + 9", "11"]);
        assert_eq!(s.last().unwrap().result, 11.0);
    }

    #[test]
    fn left_to_right_within_precedence_level() {
        let s = steps("20 / 5 * 2 - 3 + 1");
        let results: Vec<f64> = s.iter().map(|st| st.result).collect();
        assert_eq!(results, vec![4.0, 8.0, 5.0, 6.0]);
    }

    #[test]
    fn bare_number_is_a_single_step() {
        let s = steps("(42)");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].expression, "42");
        assert_eq!(s[0].result, 42.0);
    }

    #[test]
    fn iterator_is_one_shot() {
        let mut it = SolutionSteps::new(tokenize("1 + 1").unwrap());
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn renders_groups_tightly() {
        let s = steps("(1 + 2) × (3 + 4)");
        assert_eq!(s[0].expression, "3 × (3 + 4)");
        assert_eq!(s[1].expression, "3 × 7");
        assert_eq!(s[2].expression, "21");
    }
}
