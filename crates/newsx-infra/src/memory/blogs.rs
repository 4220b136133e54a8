use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use newsx_core::domain::{Blog, BlogCard, BlogSummary, DocumentId, InsertOutcome, NewBlog};
use newsx_core::error::RepoError;
use newsx_core::ports::BlogRepository;

/// In-memory `blogs` collection. Natural order is insertion order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blogs sorted by `publish_date` descending; text dates follow real
    /// ones and undated blogs go last, matching a descending sort on a
    /// document store.
    async fn newest_first(&self) -> Vec<Blog> {
        let mut blogs = self.store.read().await.clone();
        blogs.sort_by(by_publish_date_desc);
        blogs
    }
}

fn by_publish_date_desc(a: &Blog, b: &Blog) -> Ordering {
    match (&a.publish_date, &b.publish_date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: NewBlog) -> Result<InsertOutcome, RepoError> {
        let id = DocumentId::new();
        self.store.write().await.push(blog.into_blog(id));
        tracing::debug!(blog_id = %id, "Inserted blog in memory");
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn find_cards(&self, skip: u64, limit: u64) -> Result<Vec<BlogCard>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .skip(to_usize(skip))
            .take(to_usize(limit))
            .map(|blog| blog.to_card(true))
            .collect())
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogCard>, RepoError> {
        Ok(self
            .newest_first()
            .await
            .iter()
            .take(to_usize(limit))
            .map(|blog| blog.to_card(false))
            .collect())
    }

    async fn find_by_id(&self, id: DocumentId) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|blog| blog.id == id).cloned())
    }

    async fn find_all_summaries(&self) -> Result<Vec<BlogSummary>, RepoError> {
        Ok(self
            .newest_first()
            .await
            .iter()
            .map(Blog::to_summary)
            .collect())
    }
}
