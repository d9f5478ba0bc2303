//! Top-level tutor configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    MathConfig, MemoryConfig, MiddlewareConfig, ObservabilityConfig, SessionConfig, StyleConfig,
};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TUTOR_*`)
/// 2. Config file (`tutor.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TutorConfig {
    pub session: SessionConfig,
    pub memory: MemoryConfig,
    pub math: MathConfig,
    pub style: StyleConfig,
    pub middleware: MiddlewareConfig,
    pub observability: ObservabilityConfig,
}

impl TutorConfig {
    /// Load configuration from `path` (if it exists), apply `TUTOR_*`
    /// environment overrides, and validate the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TUTOR_MAX_MESSAGES").and_then(|v| v.parse().ok()) {
            self.session.max_messages = v;
        }
        if let Some(v) = lookup("TUTOR_MAX_PAREN_DEPTH").and_then(|v| v.parse().ok()) {
            self.math.max_paren_depth = v;
        }
        if let Some(v) = lookup("TUTOR_STYLE_WINDOW").and_then(|v| v.parse().ok()) {
            self.style.window = v;
        }
        if let Some(v) = lookup("TUTOR_PROFILE_LOOKUP").and_then(|v| parse_bool(&v)) {
            self.middleware.profile_lookup = v;
        }
        if let Some(v) = lookup(constants::LOG_ENV_VAR) {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.max_messages == 0
            || self.session.max_messages > constants::MAX_SESSION_MESSAGES
        {
            return Err(ConfigError::ValidationFailed {
                field: "session.max_messages".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_SESSION_MESSAGES),
            });
        }
        if self.session.max_topics == 0
            || self.session.max_topics > constants::MAX_TOPIC_INDEX_SIZE
        {
            return Err(ConfigError::ValidationFailed {
                field: "session.max_topics".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_TOPIC_INDEX_SIZE),
            });
        }
        if self.session.min_token_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.min_token_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.session.max_ngram == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.max_ngram".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.memory.max_topic_words == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "memory.max_topic_words".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.math.epsilon.is_finite() || self.math.epsilon < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "math.epsilon".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        if self.style.window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "style.window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
