//! Health check endpoints

use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::DatabasePool;

/// Liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub version: String,
}

/// Health check response including the database
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
    /// Application version
    pub version: String,
    /// Database connection status
    #[schema(example = "connected")]
    pub database: String,
}

/// Liveness check
///
/// Always 200 while the process serves requests; no dependency is checked.
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = LivenessResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    ::tracing::debug!("Liveness check: healthy");

    Json(LivenessResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check including database connectivity
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = HealthResponse),
    )
)]
#[get("/health/db")]
pub async fn health_db(db: Data<DatabasePool>) -> impl Responder {
    let connected = db.ping().await;

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        ::tracing::warn!("Database health check failed");
        HttpResponse::ServiceUnavailable().json(response)
    }
}
