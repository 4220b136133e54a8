//! MongoDB repository implementations.

use async_trait::async_trait;
use bson::doc;

use newsx_core::domain::{
    Blog, BlogCard, BlogSummary, DocumentId, InsertOutcome, NewBlog, NewUser, User,
};
use newsx_core::error::RepoError;
use newsx_core::ports::{BlogRepository, UserRepository};

use super::connections::DatabaseConnection;
use super::documents::{
    BlogCardDocument, BlogDocument, BlogSummaryDocument, UserDocument, newest_first,
};
use super::mongo_base::{MongoBaseRepository, ProjectedFind};
use super::{BLOGS_COLLECTION, USERS_COLLECTION};
use crate::masking::mask_email;

/// MongoDB user repository.
pub type MongoUserRepository = MongoBaseRepository<UserDocument>;

/// MongoDB blog repository.
pub type MongoBlogRepository = MongoBaseRepository<BlogDocument>;

impl MongoUserRepository {
    pub fn from_connection(db: &DatabaseConnection) -> Self {
        Self::new(db.collection(USERS_COLLECTION))
    }
}

impl MongoBlogRepository {
    pub fn from_connection(db: &DatabaseConnection) -> Self {
        Self::new(db.collection(BLOGS_COLLECTION))
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> Result<InsertOutcome, RepoError> {
        let outcome = self.insert_document(UserDocument::from(user)).await?;
        tracing::debug!(user_id = %outcome.inserted_id, "Inserted user");
        Ok(outcome)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_name = %name, "Finding user by name");

        let found = self.find_one_by(doc! { "name": name }).await?;
        Ok(found.map(Into::into))
    }

    async fn find_by_email_and_name(
        &self,
        email: &str,
        name: &str,
    ) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), user_name = %name, "Finding user by email");

        let found = self
            .find_one_by(doc! { "email": email, "name": name })
            .await?;
        Ok(found.map(Into::into))
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn insert(&self, blog: NewBlog) -> Result<InsertOutcome, RepoError> {
        let outcome = self.insert_document(BlogDocument::from(blog)).await?;
        tracing::debug!(blog_id = %outcome.inserted_id, "Inserted blog");
        Ok(outcome)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.count_all().await
    }

    async fn find_cards(&self, skip: u64, limit: u64) -> Result<Vec<BlogCard>, RepoError> {
        tracing::debug!(skip, limit, "Listing blog cards");

        let cards: Vec<BlogCardDocument> = self
            .find_projected(ProjectedFind {
                projection: BlogCardDocument::projection(true),
                skip: Some(skip),
                limit: Some(limit),
                ..ProjectedFind::default()
            })
            .await?;
        Ok(cards.into_iter().map(Into::into).collect())
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogCard>, RepoError> {
        let cards: Vec<BlogCardDocument> = self
            .find_projected(ProjectedFind {
                projection: BlogCardDocument::projection(false),
                sort: Some(newest_first()),
                limit: Some(limit),
                ..ProjectedFind::default()
            })
            .await?;
        Ok(cards.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Blog>, RepoError> {
        let found = self.find_one_by(doc! { "_id": id.object_id() }).await?;
        Ok(found.map(Into::into))
    }

    async fn find_all_summaries(&self) -> Result<Vec<BlogSummary>, RepoError> {
        let rows: Vec<BlogSummaryDocument> = self
            .find_projected(ProjectedFind {
                projection: BlogSummaryDocument::projection(),
                sort: Some(newest_first()),
                ..ProjectedFind::default()
            })
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
