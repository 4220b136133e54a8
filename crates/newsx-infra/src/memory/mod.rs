//! In-memory repositories - used when no document store is configured.
//!
//! Note: Data is lost on process restart.

mod blogs;
mod users;

pub use blogs::InMemoryBlogRepository;
pub use users::InMemoryUserRepository;
