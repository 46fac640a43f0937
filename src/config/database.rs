use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, WithDefaults};

/// Upper bound of simultaneously open database connections.
///
/// Requests beyond this limit wait for a connection to be released.
pub const MAX_CONNECTIONS: u32 = 10;

/// Database configuration
///
/// Either `url` is given verbatim, or a MySQL URL is assembled from the
/// individual fields. The individual fields can also be supplied through the
/// plain `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_DATABASE` variables.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL, takes precedence over the other fields
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Database (schema) name
    #[serde(default = "default_name")]
    pub name: String,
    /// Apply pending migrations at start-up
    #[serde(default = "default_migrate")]
    pub migrate: bool,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_name() -> String {
    "users".to_string()
}

fn default_migrate() -> bool {
    true
}

impl DatabaseConfig {
    /// Connection URL used to build the pool
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                self.name,
            ),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("migrate", &self.migrate)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            name: default_name(),
            migrate: default_migrate(),
        }
    }
}

impl WithDefaults for DatabaseConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.url {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "database.url cannot be empty when set".to_string(),
                ));
            }
            return Ok(());
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "database.port must be > 0".to_string(),
            ));
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.user cannot be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
