//! Expression tokenizer.

use std::fmt;

use tutor_core::errors::MathError;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Multiplicative operators bind tighter.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Op::Mul | Op::Div)
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, MathError> {
        match self {
            Op::Add => Ok(lhs + rhs),
            Op::Sub => Ok(lhs - rhs),
            Op::Mul => Ok(lhs * rhs),
            Op::Div if rhs == 0.0 => Err(MathError::DivisionByZero),
            Op::Div => Ok(lhs / rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Num(f64),
    /// `symbol` is the character as written, kept for step rendering.
    Op { op: Op, symbol: char },
    LParen,
    RParen,
}

impl Token {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Token::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_op(&self) -> Option<Op> {
        match self {
            Token::Op { op, .. } => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(v) => f.write_str(&crate::number::format_number(*v)),
            Token::Op { symbol, .. } => write!(f, "{symbol}"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

fn operator(ch: char) -> Option<Op> {
    match ch {
        '+' => Some(Op::Add),
        '-' | '\u{2212}' => Some(Op::Sub),
        '*' | '×' | '·' => Some(Op::Mul),
        '/' | '÷' => Some(Op::Div),
        _ => None,
    }
}

/// Tokenize an arithmetic expression.
///
/// A minus sign is unary when it opens the expression or follows an
/// operator or `(`, and it must be directly followed by a literal.
pub fn tokenize(input: &str) -> Result<Vec<Token>, MathError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, ch) = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        let expects_operand = matches!(
            tokens.last(),
            None | Some(Token::Op { .. }) | Some(Token::LParen)
        );

        if ch.is_ascii_digit() || ch == '.' || (expects_operand && operator(ch) == Some(Op::Sub)) {
            let negative = !(ch.is_ascii_digit() || ch == '.');
            let mut j = if negative { i + 1 } else { i };
            let start = j;
            while j < chars.len() && (chars[j].1.is_ascii_digit() || chars[j].1 == '.') {
                j += 1;
            }
            if j == start {
                return Err(match chars.get(j) {
                    Some(&(offset, ch)) => MathError::UnexpectedChar { ch, offset },
                    None => MathError::UnexpectedEnd,
                });
            }
            let literal: String = chars[start..j].iter().map(|(_, c)| *c).collect();
            if literal.matches('.').count() > 1 || literal == "." {
                return Err(MathError::InvalidNumber { literal });
            }
            let value: f64 = literal
                .parse()
                .map_err(|_| MathError::InvalidNumber { literal })?;
            tokens.push(Token::Num(if negative { -value } else { value }));
            i = j;
            continue;
        }

        match (ch, operator(ch)) {
            (_, Some(op)) => tokens.push(Token::Op { op, symbol: ch }),
            ('(', None) => tokens.push(Token::LParen),
            (')', None) => tokens.push(Token::RParen),
            _ => return Err(MathError::UnexpectedChar { ch, offset }),
        }
        i += 1;
    }

    if tokens.is_empty() {
        return Err(MathError::Empty);
    }
    Ok(tokens)
}
