//! Application configuration structures.

use crate::DatabaseDialect;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use userdir_core::{telemetry::TelemetryConfig, DirectoryError, DirectoryResult};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "userdir".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Path serving both the GraphQL endpoint and GraphiQL.
    pub graphql_path: String,
    /// Enable CORS.
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            graphql_path: "/graphql".to_string(),
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Returns the bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL printed at startup for humans to open.
    #[must_use]
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}{}", self.port, self.graphql_path)
    }
}

/// Database configuration.
///
/// Either `url` is set explicitly, or one is assembled from the discrete
/// connection fields for the configured `dialect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQL backend.
    pub dialect: DatabaseDialect,
    /// Database name; a file path for SQLite, `:memory:` for an in-memory one.
    pub name: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database host.
    pub host: String,
    /// Database port; the dialect default when unset.
    pub port: Option<u16>,
    /// Full connection URL, overriding the discrete fields.
    pub url: Option<String>,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: DatabaseDialect::Sqlite,
            name: "userdir.db".to_string(),
            user: String::new(),
            password: String::new(),
            host: "localhost".to_string(),
            port: None,
            url: None,
            min_connections: 1,
            max_connections: 10,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite settings. A single connection keeps every query on
    /// the same database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            dialect: DatabaseDialect::Sqlite,
            name: ":memory:".to_string(),
            min_connections: 1,
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Dialect actually in use: an explicit `url` decides by its scheme.
    #[must_use]
    pub fn effective_dialect(&self) -> DatabaseDialect {
        let scheme = self
            .url
            .as_deref()
            .and_then(|url| url.split_once(':'))
            .map(|(scheme, _)| scheme);

        match scheme {
            Some("postgres" | "postgresql") => DatabaseDialect::Postgres,
            Some("mysql" | "mariadb") => DatabaseDialect::Mysql,
            Some("sqlite") => DatabaseDialect::Sqlite,
            _ => self.dialect,
        }
    }

    /// Returns the connection URL handed to the sqlx driver.
    pub fn connection_url(&self) -> DirectoryResult<String> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }

        match self.dialect {
            DatabaseDialect::Sqlite => Ok(if self.name == ":memory:" {
                "sqlite::memory:".to_string()
            } else {
                format!("sqlite:{}?mode=rwc", self.name)
            }),
            DatabaseDialect::Mysql | DatabaseDialect::Postgres => self.server_url(),
        }
    }

    fn server_url(&self) -> DirectoryResult<String> {
        let invalid = |what: &str| DirectoryError::configuration(format!("Invalid database {what}"));

        let mut url = Url::parse(&format!("{}://{}", self.dialect.scheme(), self.host))
            .map_err(|e| DirectoryError::configuration(format!("Invalid database host '{}': {e}", self.host)))?;

        url.set_port(self.port.or_else(|| self.dialect.default_port()))
            .map_err(|()| invalid("port"))?;
        url.set_path(&format!("/{}", self.name));

        if !self.user.is_empty() {
            url.set_username(&self.user).map_err(|()| invalid("user"))?;
            if !self.password.is_empty() {
                url.set_password(Some(&self.password))
                    .map_err(|()| invalid("password"))?;
            }
        }

        Ok(url.to_string())
    }

    /// Connection URL with the password masked, for logs.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        match self.connection_url() {
            Ok(raw) => match Url::parse(&raw) {
                Ok(mut url) if url.password().is_some() => {
                    let _ = url.set_password(Some("****"));
                    url.to_string()
                }
                _ => raw,
            },
            Err(_) => "<invalid>".to_string(),
        }
    }
}
