use std::sync::Arc;

use crate::domain::{
    Blog, BlogCard, BlogDraft, BlogSummary, DocumentId, InsertOutcome, Page, PageRequest,
    RECENT_BLOGS_LIMIT,
};
use crate::error::DomainError;
use crate::ports::BlogRepository;

/// Blog submission and the read-side listings.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_blog(&self, draft: BlogDraft) -> Result<InsertOutcome, DomainError> {
        let blog = draft.validate()?;
        Ok(self.repo.insert(blog).await?)
    }

    /// One page of listing cards plus the collection total.
    pub async fn list_blogs_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<BlogCard>, DomainError> {
        let items = self
            .repo
            .find_cards(request.skip(), request.per_page())
            .await?;
        let total_items = self.repo.count().await?;

        Ok(Page {
            items,
            request,
            total_items,
        })
    }

    /// The newest posts; an empty collection is reported as not found.
    pub async fn list_recent_blogs(&self) -> Result<Vec<BlogCard>, DomainError> {
        let recent = self.repo.find_recent(RECENT_BLOGS_LIMIT).await?;
        if recent.is_empty() {
            return Err(DomainError::NotFound {
                entity_type: "Blog",
                key: "recent".to_string(),
            });
        }
        Ok(recent)
    }

    /// Full document by its hexadecimal identifier.
    pub async fn get_blog_by_id(&self, raw_id: &str) -> Result<Blog, DomainError> {
        let id = DocumentId::parse(raw_id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Blog",
                key: id.to_hex(),
            })
    }

    pub async fn list_all_blogs(&self) -> Result<Vec<BlogSummary>, DomainError> {
        Ok(self.repo.find_all_summaries().await?)
    }
}
