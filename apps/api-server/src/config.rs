//! Application configuration loaded from environment variables.

use std::env;

use newsx_infra::database::{DEFAULT_DATABASE_NAME, DatabaseConfig};

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// `MONGODB_URI` wins over `DB_HOST`; without either the server runs on
    /// the in-memory store.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let uri = non_empty("MONGODB_URI").or_else(|| {
            non_empty("DB_HOST")
                .map(|host| format!("mongodb+srv://{host}/?retryWrites=true&w=majority"))
        });

        let database = uri.map(|uri| DatabaseConfig {
            uri,
            username: non_empty("DB_USER"),
            password: non_empty("DB_PASS"),
            database: non_empty("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            app_name: non_empty("DB_APP_NAME").or_else(|| Some("newsx-api".to_string())),
        });

        Self {
            host: non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database.is_none());
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        assert_eq!(config(&[("PORT", "eighty")]).port, DEFAULT_PORT);
        assert_eq!(config(&[("PORT", "8081")]).port, 8081);
    }

    #[test]
    fn cluster_host_and_credentials_build_database_config() {
        let config = config(&[
            ("DB_HOST", "cluster0.example.net"),
            ("DB_USER", "newsx"),
            ("DB_PASS", "p@ss:word"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(
            database.uri,
            "mongodb+srv://cluster0.example.net/?retryWrites=true&w=majority"
        );
        assert_eq!(database.username.as_deref(), Some("newsx"));
        assert_eq!(database.password.as_deref(), Some("p@ss:word"));
        assert_eq!(database.database, "newsxDB");
    }

    #[test]
    fn explicit_uri_takes_precedence() {
        let config = config(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("DB_HOST", "cluster0.example.net"),
            ("DB_NAME", "staging"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.uri, "mongodb://localhost:27017");
        assert_eq!(database.database, "staging");
        assert!(database.username.is_none());
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let config = config(&[("MONGODB_URI", "mongodb://db"), ("DB_PASS", "hunter2")]);

        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
