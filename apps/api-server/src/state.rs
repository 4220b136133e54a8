//! Application state - shared across all handlers.

use std::sync::Arc;

use newsx_core::ports::{BlogRepository, UserRepository};
use newsx_core::services::{BlogService, UserService};
use newsx_infra::database::DatabaseConfig;
use newsx_infra::memory::{InMemoryBlogRepository, InMemoryUserRepository};

#[cfg(feature = "mongodb")]
use newsx_infra::database::{DatabaseConnection, MongoBlogRepository, MongoUserRepository};

/// Which adapter backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    MongoDb,
    InMemory,
}

impl StorageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageKind::MongoDb => "mongodb",
            StorageKind::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub blogs: BlogService,
    pub storage: StorageKind,
    #[cfg(feature = "mongodb")]
    db: Option<Arc<DatabaseConnection>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "mongodb")]
        {
            if let Some(config) = db_config {
                match DatabaseConnection::init(config).await {
                    Ok(connection) => {
                        let db = Arc::new(connection);
                        let state = Self::with_repositories(
                            Arc::new(MongoUserRepository::from_connection(&db)),
                            Arc::new(MongoBlogRepository::from_connection(&db)),
                            StorageKind::MongoDb,
                        );
                        tracing::info!(database = %db.database_name(), "Application state initialized");
                        return Self {
                            db: Some(db),
                            ..state
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to document store: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("No database configured. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "mongodb"))]
        {
            if db_config.is_some() {
                tracing::warn!("Database configured but the mongodb feature is disabled");
            }
            tracing::info!("Running without mongodb feature - using in-memory repositories");
        }

        let state = Self::in_memory();
        tracing::info!("Application state initialized");
        state
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBlogRepository::new()),
            StorageKind::InMemory,
        )
    }

    fn with_repositories(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        storage: StorageKind,
    ) -> Self {
        Self {
            users: UserService::new(users),
            blogs: BlogService::new(blogs),
            storage,
            #[cfg(feature = "mongodb")]
            db: None,
        }
    }

    /// Release the store connection, if any.
    pub async fn shutdown(&self) {
        #[cfg(feature = "mongodb")]
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
