//! Tracing subscriber set-up
//!
//! `RUST_LOG` takes precedence over `observability.log_level`. Records emitted
//! through the `log` facade (actix's access logger) are bridged into tracing.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::ObservabilityConfig;

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()
    };

    if result.is_err() {
        ::tracing::debug!("Tracing subscriber already installed");
    }
}
