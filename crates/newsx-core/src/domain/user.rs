use serde::{Deserialize, Serialize};

use super::DocumentId;
use super::validation::RequiredFields;
use crate::error::DomainError;

/// The only account name that the lookup endpoints will serve.
pub const ADMIN_NAME: &str = "admin";

/// User entity - a registered account as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.name == ADMIN_NAME
    }
}

/// A validated user ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Attach the identifier generated at insert time.
    pub fn into_user(self, id: DocumentId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Unvalidated registration input.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserDraft {
    /// Require non-empty `name`, `email` and `password`.
    pub fn validate(self) -> Result<NewUser, DomainError> {
        let mut required = RequiredFields::new();
        let name = required.text("name", self.name);
        let email = required.text("email", self.email);
        let password = required.text("password", self.password);
        required.finish()?;

        Ok(NewUser {
            name,
            email,
            password,
        })
    }
}
