use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only projection of a topic index entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Normalized (lowercased) keyword or short n-gram.
    pub topic: String,
    /// Timestamp of the most recent message mentioning the topic.
    pub last_seen: DateTime<Utc>,
    /// Number of mentions across the session.
    pub count: u32,
}
