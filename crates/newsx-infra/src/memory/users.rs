use async_trait::async_trait;
use tokio::sync::RwLock;

use newsx_core::domain::{DocumentId, InsertOutcome, NewUser, User};
use newsx_core::error::RepoError;
use newsx_core::ports::UserRepository;

use crate::masking::mask_email;

/// In-memory `users` collection, kept in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepoError> {
        let id = DocumentId::new();
        self.store.write().await.push(user.into_user(id));
        tracing::debug!(user_id = %id, "Inserted user in memory");
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.name == name).cloned())
    }

    async fn find_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");
        let store = self.store.read().await;
        Ok(store
            .iter()
            .find(|u| u.email == email && u.name == name)
            .cloned())
    }
}
