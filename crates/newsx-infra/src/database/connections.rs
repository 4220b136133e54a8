#[cfg(feature = "mongodb")]
use bson::doc;
#[cfg(feature = "mongodb")]
use mongodb::{
    Client, Collection, Database,
    options::{ClientOptions, Credential, ServerApi, ServerApiVersion},
};

/// Database used when none is configured.
pub const DEFAULT_DATABASE_NAME: &str = "newsxDB";

/// Configuration for the document store.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `mongodb+srv://cluster0.example.net/?retryWrites=true`.
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: String,
    pub app_name: Option<String>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("app_name", &self.app_name)
            .finish()
    }
}

/// The single process-wide client plus the selected database.
///
/// Opened once at startup, shared through `Arc`, closed at shutdown.
#[cfg(feature = "mongodb")]
pub struct DatabaseConnection {
    client: Client,
    database: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnection {
    /// Connect and ping the deployment so that a bad configuration fails at
    /// startup rather than on the first request.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!(database = %config.database, "Initializing document store connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        if let Some(app_name) = &config.app_name {
            options.app_name = Some(app_name.clone());
        }
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            options.credential = Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .build(),
            );
        }

        let client = Client::with_options(options)?;
        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        tracing::info!("Connected to document store");

        let database = client.database(&config.database);
        Ok(Self { client, database })
    }

    /// Typed handle on a collection of the configured database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Close the client, waiting for in-flight operations to finish.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("Document store connection closed");
    }
}
