use async_trait::async_trait;

use crate::errors::TutorResult;
use crate::models::UserProfile;

/// Read-only access to long-term user profiles.
///
/// `Ok(None)` means the user has not opted in; it is not an error.
#[async_trait]
pub trait IUserProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> TutorResult<Option<UserProfile>>;
}
