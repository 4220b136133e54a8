//! Document store connection management and MongoDB repositories.

mod connections;

#[cfg(feature = "mongodb")]
mod documents;
#[cfg(feature = "mongodb")]
mod mongo_base;
#[cfg(feature = "mongodb")]
pub mod mongo_repo;

pub use connections::{DEFAULT_DATABASE_NAME, DatabaseConfig};

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnection;

#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoBlogRepository, MongoUserRepository};

/// Collection holding registered accounts.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding blog posts.
pub const BLOGS_COLLECTION: &str = "blogs";

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
