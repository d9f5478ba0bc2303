//! PreProcessedContext: the user's locked session plus optional profile,
//! handed to the caller for prompt construction.

use tutor_core::models::{ChatMessage, TopicRecord, UserProfile};
use tutor_session::{SessionContext, SessionGuard};

/// Holds the user's turn lock until post-processing consumes it. Dropping it
/// without post-processing abandons the turn; the user message stays recorded.
#[derive(Debug)]
pub struct PreProcessedContext {
    pub(crate) user_id: String,
    pub(crate) session: SessionGuard,
    pub(crate) profile: Option<UserProfile>,
}

impl PreProcessedContext {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Read-only view of the session, including the current user message.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Last `limit` messages for the prompt window.
    pub fn recent_messages(&self, limit: usize) -> Vec<&ChatMessage> {
        self.session.get_recent_messages(limit)
    }

    pub fn recent_topics(&self, top_k: usize) -> Vec<TopicRecord> {
        self.session.get_recent_topics(top_k)
    }
}
