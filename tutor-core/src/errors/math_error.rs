/// Expression lexing, parsing, and evaluation errors.
///
/// Inside statement validation these are parse-skips, never surfaced to users.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number literal: {literal}")]
    InvalidNumber { literal: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token at position {position}")]
    UnexpectedToken { position: usize },

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("parenthesis nesting depth {depth} exceeds supported maximum {max_depth}")]
    NestingTooDeep { depth: usize, max_depth: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("empty expression")]
    Empty,
}
