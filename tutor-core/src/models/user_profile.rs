use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LearningStyleProfile;

/// Long-term, opt-in user preferences owned by an external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Topics discussed in earlier sessions.
    #[serde(default)]
    pub discussed_topics: Vec<String>,
    /// Last persisted learning-style estimate.
    #[serde(default)]
    pub learning_style: Option<LearningStyleProfile>,
    pub opted_in_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            discussed_topics: Vec::new(),
            learning_style: None,
            opted_in_at: Utc::now(),
        }
    }

    pub fn with_discussed_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.discussed_topics = topics.into_iter().map(Into::into).collect();
        self
    }
}
