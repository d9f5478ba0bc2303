use serde::{Deserialize, Serialize};

use super::defaults;

/// Middleware orchestration configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiddlewareConfig {
    /// Whether `pre_process_message` consults the user profile store.
    pub profile_lookup: bool,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            profile_lookup: defaults::DEFAULT_PROFILE_LOOKUP,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `TUTOR_LOG` is unset.
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
