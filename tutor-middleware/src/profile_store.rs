//! Profile store implementations: a DashMap-backed in-memory store and a
//! store for users who never opt in.

use async_trait::async_trait;
use dashmap::DashMap;

use tutor_core::errors::TutorResult;
use tutor_core::models::UserProfile;
use tutor_core::traits::IUserProfileStore;

/// Store that never has a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProfileStore;

#[async_trait]
impl IUserProfileStore for NoProfileStore {
    async fn get_profile(&self, _user_id: &str) -> TutorResult<Option<UserProfile>> {
        Ok(None)
    }
}

/// Thread-safe in-process profile store.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile, keyed by its user id.
    pub fn insert(&self, profile: UserProfile) -> Option<UserProfile> {
        self.profiles.insert(profile.user_id.clone(), profile)
    }

    pub fn remove(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.remove(user_id).map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl IUserProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> TutorResult<Option<UserProfile>> {
        Ok(self.profiles.get(user_id).map(|p| p.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_round_trip() {
        let store = InMemoryProfileStore::new();
        assert!(store.get_profile("u1").await.unwrap().is_none());

        store.insert(UserProfile::new("u1").with_discussed_topics(["ratios"]));
        let profile = store.get_profile("u1").await.unwrap().unwrap();
        assert_eq!(profile.discussed_topics, vec!["ratios".to_string()]);
        assert_eq!(store.len(), 1);

        assert!(store.remove("u1").is_some());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn no_profile_store_is_always_empty() {
        assert!(NoProfileStore.get_profile("anyone").await.unwrap().is_none());
    }
}
