use std::sync::Arc;

use crate::domain::{ADMIN_NAME, InsertOutcome, User, UserDraft};
use crate::error::DomainError;
use crate::ports::UserRepository;

/// Registration and admin lookup.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a user. Nothing is written when validation fails.
    pub async fn create_user(&self, draft: UserDraft) -> Result<InsertOutcome, DomainError> {
        let user = draft.validate()?;
        Ok(self.repo.insert(user).await?)
    }

    /// Look up the admin account by name. Any other name is rejected before
    /// the store is queried.
    pub async fn find_admin_by_name(&self, name: &str) -> Result<User, DomainError> {
        if name != ADMIN_NAME {
            return Err(DomainError::NotAdmin(name.to_string()));
        }

        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Admin",
                key: name.to_string(),
            })
    }

    /// Look up the admin account by email. `None` is a normal outcome here.
    pub async fn find_admin_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.repo.find_by_email_and_name(email, ADMIN_NAME).await?)
    }
}
