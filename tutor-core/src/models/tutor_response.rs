use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Final output of post-processing for one assistant turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessedResponse {
    /// Text to show the user (corrected when any check failed).
    pub response: String,
    pub memory_valid: bool,
    pub math_valid: bool,
    pub corrections: Vec<String>,
    /// Per-check pass/fail counts and timings, for offline monitoring.
    pub telemetry: BTreeMap<String, u64>,
}

impl PostProcessedResponse {
    pub fn was_corrected(&self) -> bool {
        !self.corrections.is_empty()
    }
}
