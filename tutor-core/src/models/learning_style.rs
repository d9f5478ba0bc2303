use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four learning-style dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningDimension {
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

impl LearningDimension {
    pub const ALL: [LearningDimension; 4] = [
        LearningDimension::Visual,
        LearningDimension::Auditory,
        LearningDimension::Kinesthetic,
        LearningDimension::Reading,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
            Self::Reading => "reading/writing",
        }
    }
}

impl fmt::Display for LearningDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, unnormalized preference scores. Only relative magnitude matters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LearningStyleProfile {
    pub visual: f64,
    pub auditory: f64,
    pub kinesthetic: f64,
    pub reading: f64,
}

impl LearningStyleProfile {
    pub fn score(&self, dimension: LearningDimension) -> f64 {
        match dimension {
            LearningDimension::Visual => self.visual,
            LearningDimension::Auditory => self.auditory,
            LearningDimension::Kinesthetic => self.kinesthetic,
            LearningDimension::Reading => self.reading,
        }
    }

    /// Add `weight` to a dimension. Negative weights are ignored.
    pub fn add(&mut self, dimension: LearningDimension, weight: f64) {
        let weight = weight.max(0.0);
        match dimension {
            LearningDimension::Visual => self.visual += weight,
            LearningDimension::Auditory => self.auditory += weight,
            LearningDimension::Kinesthetic => self.kinesthetic += weight,
            LearningDimension::Reading => self.reading += weight,
        }
    }

    pub fn is_zero(&self) -> bool {
        LearningDimension::ALL.iter().all(|d| self.score(*d) == 0.0)
    }

    pub fn max_score(&self) -> f64 {
        LearningDimension::ALL
            .iter()
            .map(|d| self.score(*d))
            .fold(0.0, f64::max)
    }
}
