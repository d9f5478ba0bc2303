//! SessionContext: bounded message history and topic index per user.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutor_core::config::SessionConfig;
use tutor_core::models::{ChatMessage, Role, TopicRecord};

use crate::topics;

/// Internal topic index entry. `last_seq` orders topics by recency even when
/// several messages share a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TopicEntry {
    last_seen: DateTime<Utc>,
    last_seq: u64,
    count: u32,
}

/// Per-user conversational state.
///
/// Invariants: `messages.len() <= config.max_messages`, and the topic index
/// only holds keys derived from messages that were added to this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    user_id: String,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
    messages: VecDeque<ChatMessage>,
    topics: HashMap<String, TopicEntry>,
    next_seq: u64,
    config: SessionConfig,
}

impl SessionContext {
    /// Create an empty session for `user_id`.
    pub fn new(user_id: impl Into<String>, config: SessionConfig) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            created_at: now,
            last_activity: now,
            messages: VecDeque::with_capacity(config.max_messages.min(64)),
            topics: HashMap::new(),
            next_seq: 0,
            config,
        }
    }

    /// Append a message, evicting the oldest when over capacity, then index
    /// its topics. A single atomic update: never fails, never partially applies.
    pub fn add_message(&mut self, message: ChatMessage) {
        let keys = topics::extract_topics(
            &message.content,
            self.config.min_token_len,
            self.config.max_ngram,
        );
        let seen_at = message.timestamp;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.messages.push_back(message);
        while self.messages.len() > self.config.max_messages.max(1) {
            self.messages.pop_front();
        }

        for key in keys {
            let entry = self.topics.entry(key).or_insert(TopicEntry {
                last_seen: seen_at,
                last_seq: seq,
                count: 0,
            });
            entry.count = entry.count.saturating_add(1);
            entry.last_seq = seq;
            if seen_at > entry.last_seen {
                entry.last_seen = seen_at;
            }
        }
        self.evict_stale_topics();
        self.last_activity = Utc::now();
    }

    /// Drop least-recently-seen topics until the index fits `max_topics`.
    fn evict_stale_topics(&mut self) {
        let limit = self.config.max_topics.max(1);
        if self.topics.len() <= limit {
            return;
        }
        let mut ranked: Vec<(String, u64, u32)> = self
            .topics
            .iter()
            .map(|(k, e)| (k.clone(), e.last_seq, e.count))
            .collect();
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.cmp(&b.2)));
        let excess = self.topics.len() - limit;
        for (key, _, _) in ranked.into_iter().take(excess) {
            self.topics.remove(&key);
        }
    }

    /// Every retained message, oldest first.
    pub fn get_all_messages(&self) -> Vec<&ChatMessage> {
        self.messages.iter().collect()
    }

    /// The last `limit` messages, most recent last.
    pub fn get_recent_messages(&self, limit: usize) -> Vec<&ChatMessage> {
        let skip = self.messages.len().saturating_sub(limit);
        self.messages.iter().skip(skip).collect()
    }

    /// Top `top_k` topics by recency, then frequency.
    pub fn get_recent_topics(&self, top_k: usize) -> Vec<TopicRecord> {
        let mut entries: Vec<(&String, &TopicEntry)> = self.topics.iter().collect();
        entries.sort_by(|a, b| {
            b.1.last_seq
                .cmp(&a.1.last_seq)
                .then(b.1.count.cmp(&a.1.count))
                .then(a.0.cmp(b.0))
        });
        entries
            .into_iter()
            .take(top_k)
            .map(|(topic, e)| TopicRecord {
                topic: topic.clone(),
                last_seen: e.last_seen,
                count: e.count,
            })
            .collect()
    }

    /// Whether `topic` matches the topic index (case-insensitive, stemmed).
    ///
    /// An exact phrase hit on an n-gram key counts; otherwise every content
    /// word of `topic` has to match some single-word key.
    pub fn has_discussed_topic(&self, topic: &str) -> bool {
        let query = topics::content_words(topic, self.config.min_token_len);
        if query.is_empty() || self.topics.is_empty() {
            return false;
        }
        let phrase: Vec<&str> = query.iter().map(|w| w.text.as_str()).collect();
        if self.topics.contains_key(&phrase.join(" ")) {
            return true;
        }
        query.iter().all(|w| {
            self.topics
                .keys()
                .filter(|k| !k.contains(' '))
                .any(|k| topics::term_matches(k, &w.text))
        })
    }

    /// Lookup a single topic's record by exact key.
    pub fn topic(&self, key: &str) -> Option<TopicRecord> {
        let key = key.to_lowercase();
        self.topics.get(&key).map(|e| TopicRecord {
            topic: key.clone(),
            last_seen: e.last_seen,
            count: e.count,
        })
    }

    /// Whether an assistant turn is still in the retained history.
    pub fn has_assistant_turn(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::Assistant)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn max_messages(&self) -> usize {
        self.config.max_messages
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(max_messages: usize) -> SessionContext {
        SessionContext::new(
            "u1",
            SessionConfig {
                max_messages,
                ..SessionConfig::default()
            },
        )
    }

    #[test]
    fn new_session_is_empty() {
        let ctx = session(5);
        assert!(ctx.is_empty());
        assert_eq!(ctx.topic_count(), 0);
        assert!(!ctx.has_discussed_topic("anything"));
        assert!(!ctx.has_assistant_turn());
    }

    #[test]
    fn recent_messages_returns_tail_in_order() {
        let mut ctx = session(10);
        for i in 1..=5 {
            ctx.add_message(ChatMessage::user(format!("message {i}")));
        }
        let recent: Vec<&str> = ctx
            .get_recent_messages(3)
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(recent, vec!["message 3", "message 4", "message 5"]);
        assert_eq!(ctx.get_recent_messages(50).len(), 5);
        assert!(ctx.get_recent_messages(0).is_empty());
    }

    #[test]
    fn topic_index_survives_message_eviction() {
        let mut ctx = session(1);
        ctx.add_message(ChatMessage::user("photosynthesis basics"));
        ctx.add_message(ChatMessage::user("cellular respiration"));
        assert_eq!(ctx.len(), 1);
        assert!(ctx.has_discussed_topic("photosynthesis"));
    }

    #[test]
    fn topic_counts_accumulate() {
        let mut ctx = session(10);
        ctx.add_message(ChatMessage::user("fractions are hard"));
        ctx.add_message(ChatMessage::assistant("fractions get easier with practice"));
        assert_eq!(ctx.topic("fractions").unwrap().count, 2);
        assert_eq!(ctx.topic("FRACTIONS").unwrap().count, 2);
        assert!(ctx.has_assistant_turn());
    }

    #[test]
    fn recent_topics_order_by_recency_then_frequency() {
        let mut ctx = session(10);
        ctx.add_message(ChatMessage::user("geometry geometry geometry"));
        ctx.add_message(ChatMessage::user("algebra"));
        let top = ctx.get_recent_topics(2);
        assert_eq!(top[0].topic, "algebra");
        assert_eq!(top[1].topic, "geometry");
        assert_eq!(top[1].count, 3);
    }

    #[test]
    fn has_discussed_topic_matches_stems_and_phrases() {
        let mut ctx = session(10);
        ctx.add_message(ChatMessage::user("Can you explain quadratic equations?"));
        assert!(ctx.has_discussed_topic("quadratic equations"));
        assert!(ctx.has_discussed_topic("Quadratic Equation"));
        assert!(ctx.has_discussed_topic("equation"));
        assert!(!ctx.has_discussed_topic("linear equations"));
        assert!(!ctx.has_discussed_topic(""));
    }

    #[test]
    fn topic_index_is_bounded() {
        let mut ctx = SessionContext::new(
            "u1",
            SessionConfig {
                max_topics: 3,
                max_ngram: 1,
                ..SessionConfig::default()
            },
        );
        ctx.add_message(ChatMessage::user("alpha"));
        ctx.add_message(ChatMessage::user("bravo"));
        ctx.add_message(ChatMessage::user("charlie"));
        ctx.add_message(ChatMessage::user("delta"));
        assert_eq!(ctx.topic_count(), 3);
        assert!(ctx.topic("alpha").is_none());
        assert!(ctx.topic("delta").is_some());
    }
}
