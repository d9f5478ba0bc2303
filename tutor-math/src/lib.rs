//! # tutor-math
//!
//! Finds `lhs = rhs` arithmetic statements in natural-language answers,
//! checks them, and rewrites wrong right-hand sides.
//!
//! Supported syntax: `+ - * / × ÷`, integer and decimal literals, unary minus
//! on literals, and parenthesized sub-expressions up to a configured depth.
//! Anything else is a parse-skip: no claim is made about it.

pub mod engine;
pub mod extraction;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod steps;

pub use engine::MathEngine;
pub use steps::SolutionSteps;
