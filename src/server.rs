//! HTTP server lifecycle
//!
//! The pool is created before the server binds and closed after it stops, so
//! no handler ever sees an uninitialised or closed pool.

use std::io;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use crate::config::{AppConfig, ServerConfig};
use crate::database::{DatabaseError, DatabasePool};
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::router;

pub struct Server {
    config: AppConfig,
    pool: DatabasePool,
    metrics: AppMetrics,
}

impl Server {
    /// Open the database pool and prepare the metrics recorder
    pub async fn new(config: AppConfig) -> Result<Self, DatabaseError> {
        let pool = DatabasePool::connect(&config.database).await?;
        let metrics = AppMetrics::with_config(Some(&config));

        Ok(Self {
            config,
            pool,
            metrics,
        })
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Serve until SIGINT/SIGTERM, then close the pool
    pub async fn run(self) -> io::Result<()> {
        let Self {
            config,
            pool,
            metrics,
        } = self;

        let server_config = config.server.clone();
        let swagger = config.api.swagger_enabled;
        let data = Data::new(pool.clone());

        let mut server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .wrap(cors(&server_config))
                .wrap(MetricsMiddleware::new(metrics.clone()))
                .wrap(Logger::default())
                .configure(router::route)
                .configure(|app| {
                    if swagger {
                        router::docs(app);
                    }
                })
        })
        .shutdown_timeout(config.app.shutdown_timeout);

        if config.server.workers > 0 {
            server = server.workers(config.server.workers);
        }

        let (host, port) = config.server.address();
        ::tracing::info!(
            host = %host,
            port,
            environment = %config.app.environment,
            "Starting {} v{}",
            config.app.name,
            config.app.version
        );

        let result = server.bind((host, port))?.run().await;

        ::tracing::info!(
            timeout = ?Duration::from_secs(config.app.shutdown_timeout),
            "Server stopped, closing database pool"
        );
        pool.close().await;

        result
    }
}

fn cors(config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);

    if config.cors_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        config
            .cors_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
