/// Errors raised by an external user-profile store.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("corrupt profile for user {user_id}: {details}")]
    Corrupt { user_id: String, details: String },
}
