//! Domain entities - the core business objects.

mod blog;
mod id;
mod insert;
mod pagination;
mod user;
mod validation;

pub use blog::{Blog, BlogCard, BlogDraft, BlogSummary, Categories, NewBlog, PublishDate, Views};
pub use id::DocumentId;
pub use insert::InsertOutcome;
pub use pagination::{BLOGS_PER_PAGE, Page, PageRequest, RECENT_BLOGS_LIMIT};
pub use user::{ADMIN_NAME, NewUser, User, UserDraft};
