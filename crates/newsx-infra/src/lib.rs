//! # NewsX Infrastructure
//!
//! Concrete implementations of the repository ports defined in `newsx-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod database;
pub mod memory;

mod masking;

#[cfg(feature = "mongodb")]
pub use database::{DatabaseConfig, DatabaseConnection, MongoBlogRepository, MongoUserRepository};

pub use memory::{InMemoryBlogRepository, InMemoryUserRepository};
