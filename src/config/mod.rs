pub mod app;
pub mod database;
pub mod observability;
pub mod server;

use thiserror::Error;

pub use app::{ApiConfig, AppConfig, AppMetadata, DATABASE_ENV_OVERRIDES};
pub use database::{DatabaseConfig, MAX_CONNECTIONS};
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;

/// Failure while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One of the configuration sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A loaded value is out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Configuration sections check their own invariants after loading
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Build a section with every field set to its default
pub trait WithDefaults {
    fn with_defaults() -> Self;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
