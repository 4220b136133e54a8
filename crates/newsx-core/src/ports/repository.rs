use async_trait::async_trait;

use crate::domain::{
    Blog, BlogCard, BlogSummary, DocumentId, InsertOutcome, NewBlog, NewUser, User,
};
use crate::error::RepoError;

/// Access to the `users` collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store generates the identifier.
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepoError>;

    /// First user with the given name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError>;

    /// First user matching both email and name.
    async fn find_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> Result<Option<User>, RepoError>;
}

/// Access to the `blogs` collection.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a new blog; the store generates the identifier.
    async fn insert(&self, blog: NewBlog) -> Result<InsertOutcome, RepoError>;

    /// Number of blogs in the collection.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Listing cards (with `_id`) in natural store order.
    async fn find_cards(&self, skip: u64, limit: u64) -> Result<Vec<BlogCard>, RepoError>;

    /// Listing cards (without `_id`), newest `publish_date` first.
    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogCard>, RepoError>;

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Blog>, RepoError>;

    /// Dashboard rows for every blog, newest `publish_date` first.
    async fn find_all_summaries(&self) -> Result<Vec<BlogSummary>, RepoError>;
}
