//! # tutor-style
//!
//! Heuristic learning-style estimation over recent user messages.
//! Scores are raw keyword-hit weights per dimension; compare them, don't
//! read them as probabilities.

pub mod detector;
pub mod keywords;
pub mod recommendations;

pub use detector::LearningStyleDetector;
pub use keywords::{StyleKeyword, DEFAULT_KEYWORDS};
pub use detector::dominant_styles;
pub use recommendations::get_recommendations;
