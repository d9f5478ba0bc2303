//! Canned study-method suggestions per dominant learning style.

use tutor_core::models::{LearningDimension, LearningStyleProfile};

use crate::detector::dominant_styles;

fn suggestions_for(dimension: LearningDimension) -> [&'static str; 3] {
    match dimension {
        LearningDimension::Visual => [
            "draw a diagram or mind map of the key ideas",
            "color-code your notes by concept",
            "watch a short video walkthrough before practicing",
        ],
        LearningDimension::Auditory => [
            "explain the idea out loud in your own words",
            "study with a partner and talk through each step",
            "record a short summary and listen back to it",
        ],
        LearningDimension::Kinesthetic => [
            "work through practice problems right away",
            "use physical objects or simulations to model the problem",
            "study in short, active sessions with breaks",
        ],
        LearningDimension::Reading => [
            "rewrite the key points as structured notes",
            "read the textbook section before the lesson",
            "write a one-paragraph summary after each topic",
        ],
    }
}

const GENERAL_SUGGESTIONS: [&str; 2] = [
    "Try a mix of study methods (diagrams, discussion, practice problems, and notes) to see what works best for you.",
    "Review new material within a day of first seeing it.",
];

/// Map the highest-scoring dimension(s) to study suggestions naming the style.
/// An all-zero profile gets general suggestions.
pub fn get_recommendations(profile: &LearningStyleProfile) -> Vec<String> {
    let dominant = dominant_styles(profile);
    if dominant.is_empty() {
        return GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }
    dominant
        .into_iter()
        .flat_map(|dim| {
            suggestions_for(dim)
                .into_iter()
                .map(move |s| format!("Since you lean {}: {s}.", dim.name()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_dimension_is_named() {
        let profile = LearningStyleProfile {
            kinesthetic: 4.0,
            visual: 1.0,
            ..Default::default()
        };
        let recs = get_recommendations(&profile);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.contains("kinesthetic")));
    }

    #[test]
    fn ties_include_every_top_style() {
        let profile = LearningStyleProfile {
            visual: 2.0,
            reading: 2.0,
            ..Default::default()
        };
        let recs = get_recommendations(&profile);
        assert_eq!(recs.len(), 6);
        assert!(recs.iter().any(|r| r.contains("visual")));
        assert!(recs.iter().any(|r| r.contains("reading/writing")));
    }

    #[test]
    fn zero_profile_gets_general_advice() {
        let recs = get_recommendations(&LearningStyleProfile::default());
        assert_eq!(recs.len(), GENERAL_SUGGESTIONS.len());
    }
}
