use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, WithDefaults};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Worker threads, 0 lets actix pick one per physical core
    #[serde(default)]
    pub workers: usize,
    /// Origins allowed by CORS, empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ServerConfig {
    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
            cors_origins: Vec::new(),
        }
    }
}

impl WithDefaults for ServerConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".to_string(),
            ));
        }
        if self.cors_origins.iter().any(|origin| origin.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "server.cors_origins cannot contain empty entries".to_string(),
            ));
        }
        Ok(())
    }
}
