//! SessionManager: explicit user → session registry via DashMap.
//!
//! Each session sits behind its own async mutex. Holding the owned guard for
//! a whole turn serializes that user's turns while other users proceed freely.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use tutor_core::config::SessionConfig;

use crate::context::SessionContext;

/// Exclusive access to one user's session for the duration of a turn.
pub type SessionGuard = OwnedMutexGuard<SessionContext>;

/// Thread-safe session registry.
pub struct SessionManager {
    sessions: DashMap<String, Arc<Mutex<SessionContext>>>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Return the user's session handle, creating it on first use.
    /// At most one session is ever created per user id.
    pub fn get_or_create(&self, user_id: &str) -> Arc<Mutex<SessionContext>> {
        if let Some(existing) = self.sessions.get(user_id) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!(user_id = %user_id, "creating session");
                Arc::new(Mutex::new(SessionContext::new(
                    user_id,
                    self.config.clone(),
                )))
            });
        Arc::clone(entry.value())
    }

    /// Wait for exclusive access to the user's session.
    pub async fn lock_turn(&self, user_id: &str) -> SessionGuard {
        // The DashMap shard lock is released before awaiting.
        let handle = self.get_or_create(user_id);
        handle.lock_owned().await
    }

    /// Cloned snapshot of a session, if it exists.
    pub async fn snapshot(&self, user_id: &str) -> Option<SessionContext> {
        let handle = self.sessions.get(user_id).map(|r| Arc::clone(r.value()))?;
        let guard = handle.lock().await;
        Some(guard.clone())
    }

    /// Remove a session. In-flight turns keep their guard until they finish.
    pub fn remove_session(&self, user_id: &str) -> bool {
        self.sessions.remove(user_id).is_some()
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.sessions.contains_key(user_id)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// All user ids with a session.
    pub fn user_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
