//! Recursive-descent parser with standard precedence and a nesting limit.
//!
//! Grammar:
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUMBER | '(' expr ')'
//! ```

use tutor_core::errors::MathError;

use crate::lexer::{Op, Token};

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Binary {
        op: Op,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn eval(&self) -> Result<f64, MathError> {
        match self {
            Expr::Num(v) => Ok(*v),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval()?, rhs.eval()?),
        }
    }

    /// Number of binary operations in the tree.
    pub fn operation_count(&self) -> usize {
        match self {
            Expr::Num(_) => 0,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.operation_count() + rhs.operation_count(),
        }
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

/// Parse a token stream, rejecting parentheses nested deeper than `max_depth`.
pub fn parse(tokens: &[Token], max_depth: usize) -> Result<Expr, MathError> {
    if tokens.is_empty() {
        return Err(MathError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        max_depth,
    };
    let expr = parser.expr()?;
    match parser.tokens.get(parser.pos) {
        None => Ok(expr),
        Some(Token::RParen) => Err(MathError::UnbalancedParens),
        Some(_) => Err(MathError::UnexpectedToken {
            position: parser.pos,
        }),
    }
}

impl Parser<'_> {
    fn peek_op(&self) -> Option<Op> {
        self.tokens.get(self.pos).and_then(Token::as_op)
    }

    fn expr(&mut self) -> Result<Expr, MathError> {
        let mut lhs = self.term()?;
        while let Some(op) = self.peek_op().filter(|op| !op.is_multiplicative()) {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, MathError> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.peek_op().filter(|op| op.is_multiplicative()) {
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, MathError> {
        let token = self.tokens.get(self.pos).ok_or(MathError::UnexpectedEnd)?;
        match token {
            Token::Num(v) => {
                self.pos += 1;
                Ok(Expr::Num(*v))
            }
            Token::LParen => {
                self.depth += 1;
                if self.depth > self.max_depth {
                    return Err(MathError::NestingTooDeep {
                        depth: self.depth,
                        max_depth: self.max_depth,
                    });
                }
                self.pos += 1;
                let inner = self.expr()?;
                match self.tokens.get(self.pos) {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        self.depth -= 1;
                        Ok(inner)
                    }
                    None => Err(MathError::UnbalancedParens),
                    Some(_) => Err(MathError::UnexpectedToken { position: self.pos }),
                }
            }
            _ => Err(MathError::UnexpectedToken { position: self.pos }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn eval(input: &str, depth: usize) -> Result<f64, MathError> {
        parse(&tokenize(input)?, depth)?.eval()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval("2 + 3 * 4", 1), Ok(14.0));
        assert_eq!(eval("10 - 4 - 3", 1), Ok(3.0));
        assert_eq!(eval("24 / 4 / 2", 1), Ok(3.0));
        assert_eq!(eval("(2 + 3) * 4", 1), Ok(20.0));
    }

    #[test]
    fn nesting_limit_is_enforced() {
        assert_eq!(
            eval("((1 + 2)) * 3", 1),
            Err(MathError::NestingTooDeep {
                depth: 2,
                max_depth: 1
            })
        );
        assert_eq!(eval("((1 + 2)) * 3", 2), Ok(9.0));
        // Sibling groups are each single-level.
        assert_eq!(eval("(1 + 2) * (3 + 4)", 1), Ok(21.0));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(eval("(1 + 2", 1), Err(MathError::UnbalancedParens));
        assert_eq!(eval("1 + 2)", 1), Err(MathError::UnbalancedParens));
        assert_eq!(eval("1 +", 1), Err(MathError::UnexpectedEnd));
        assert!(eval("1 2", 1).is_err());
    }

    #[test]
    fn division_by_zero_surfaces_on_eval() {
        let expr = parse(&tokenize("5 / (2 - 2)").unwrap(), 1).unwrap();
        assert_eq!(expr.eval(), Err(MathError::DivisionByZero));
    }
}
