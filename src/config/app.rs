use serde::{Deserialize, Serialize};

use super::{
    ConfigError, DatabaseConfig, ObservabilityConfig, ServerConfig, Validate, WithDefaults,
};

/// Prefix of the structured environment overrides, e.g. `LIGHTER_USERS__SERVER__PORT`
pub const ENV_PREFIX: &str = "LIGHTER_USERS";

/// Plain variables selecting the database, mapped onto `database.*`
pub const DATABASE_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("DB_HOST", "database.host"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_DATABASE", "database.name"),
];

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Server configuration (host, port, workers, CORS)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (connection target, migrations)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Observability configuration (logging)
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// API configuration (Swagger)
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Application environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Serve Swagger UI under `/docs/`
    #[serde(default = "default_swagger_enabled")]
    pub swagger_enabled: bool,
}

// Default functions for AppMetadata
fn default_app_name() -> String {
    "lighter-users".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_swagger_enabled() -> bool {
    true
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            swagger_enabled: default_swagger_enabled(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name cannot be empty".to_string(),
            ));
        }
        if self.version.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.version cannot be empty".to_string(),
            ));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.environment cannot be empty".to_string(),
            ));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "app.shutdown_timeout must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.observability.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

impl WithDefaults for AppConfig {
    fn with_defaults() -> Self {
        Self {
            app: AppMetadata::default(),
            server: ServerConfig::with_defaults(),
            database: DatabaseConfig::with_defaults(),
            observability: ObservabilityConfig::with_defaults(),
            api: ApiConfig::default(),
        }
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_DATABASE`
/// 2. Environment variables: LIGHTER_USERS__SERVER__PORT=8080, lists
///    comma separated (LIGHTER_USERS__SERVER__CORS_ORIGINS=https://a,https://b)
/// 3. config/local.toml (git-ignored, developer overrides)
/// 4. config/{APP_ENV}.toml (development/staging/production)
/// 5. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use ::config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

    for (variable, key) in DATABASE_ENV_OVERRIDES {
        builder = builder.set_override_option(key, std::env::var(variable).ok())?;
    }

    let app_config: AppConfig = builder.build()?.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
