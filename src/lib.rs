#[macro_use(delete, get, post, put)]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use config::AppConfig;
pub use database::{DatabaseError, DatabasePool};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use server::Server;
