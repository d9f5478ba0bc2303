//! Keyword table: `{pattern, dimension, weight}` rows.

use tutor_core::models::LearningDimension;

/// One row of the keyword table. Patterns are matched case-insensitively on
/// word boundaries; multi-word patterns tolerate any run of whitespace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleKeyword {
    pub pattern: &'static str,
    pub dimension: LearningDimension,
    pub weight: f64,
}

const fn kw(pattern: &'static str, dimension: LearningDimension, weight: f64) -> StyleKeyword {
    StyleKeyword {
        pattern,
        dimension,
        weight,
    }
}

use LearningDimension::{Auditory, Kinesthetic, Reading, Visual};

pub const DEFAULT_KEYWORDS: &[StyleKeyword] = &[
    // visual
    kw("diagram", Visual, 1.0),
    kw("diagrams", Visual, 1.0),
    kw("picture", Visual, 1.0),
    kw("pictures", Visual, 1.0),
    kw("show me", Visual, 1.5),
    kw("visual", Visual, 1.0),
    kw("visualize", Visual, 1.0),
    kw("chart", Visual, 1.0),
    kw("graph", Visual, 1.0),
    kw("draw", Visual, 1.0),
    // auditory
    kw("listen", Auditory, 1.0),
    kw("hear", Auditory, 1.0),
    kw("verbally", Auditory, 1.0),
    kw("explain out loud", Auditory, 1.5),
    kw("podcast", Auditory, 1.0),
    kw("talk through", Auditory, 1.5),
    kw("say it", Auditory, 1.0),
    // kinesthetic
    kw("hands-on", Kinesthetic, 1.5),
    kw("practice", Kinesthetic, 1.0),
    kw("exercise", Kinesthetic, 1.0),
    kw("exercises", Kinesthetic, 1.0),
    kw("do it", Kinesthetic, 1.0),
    kw("try it", Kinesthetic, 1.0),
    kw("experiment", Kinesthetic, 1.0),
    kw("build", Kinesthetic, 1.0),
    // reading/writing
    kw("write", Reading, 1.0),
    kw("notes", Reading, 1.0),
    kw("read", Reading, 1.0),
    kw("reading", Reading, 1.0),
    kw("documentation", Reading, 1.0),
    kw("textbook", Reading, 1.0),
    kw("article", Reading, 1.0),
    kw("summary", Reading, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_keywords() {
        for dim in LearningDimension::ALL {
            assert!(DEFAULT_KEYWORDS.iter().any(|k| k.dimension == dim), "{dim}");
        }
    }

    #[test]
    fn patterns_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for k in DEFAULT_KEYWORDS {
            assert_eq!(k.pattern, k.pattern.to_lowercase());
            assert!(seen.insert(k.pattern), "duplicate {}", k.pattern);
            assert!(k.weight > 0.0);
        }
    }
}
