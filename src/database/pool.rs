//! Connection pool and query executor
//!
//! ```rust,no_run
//! use lighter_users::config::DatabaseConfig;
//! use lighter_users::database::DatabasePool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DatabasePool::connect(&DatabaseConfig::default()).await?;
//!
//! let rows = pool
//!     .fetch_all("SELECT id, name, email FROM users WHERE id = ?", vec![1i64.into()])
//!     .await?;
//! # let _ = rows;
//! pool.close().await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use lighter_users_migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, QueryResult,
    Statement, Value,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DatabaseError;
use crate::config::{DatabaseConfig, MAX_CONNECTIONS};
use crate::metrics;

/// Outcome of a write statement
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WriteSummary {
    /// Rows modified by the statement
    #[schema(example = 1)]
    pub affected_rows: u64,
    /// Id generated by an INSERT, 0 otherwise
    #[schema(example = 42)]
    pub insert_id: u64,
}

/// Bounded pool of database connections
///
/// Built once at start-up and injected into handlers. Every call checks a
/// connection out, runs one statement and hands the connection back, on the
/// error path as well. Callers that exceed [`MAX_CONNECTIONS`] queue until a
/// connection is released.
#[derive(Clone)]
pub struct DatabasePool {
    connection: Arc<DatabaseConnection>,
}

impl DatabasePool {
    /// Wrap an already established connection
    pub fn new(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Open the pool described by `config`, applying migrations when enabled
    #[tracing::instrument(skip(config), fields(migrate = config.migrate))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut options = ConnectOptions::new(config.url());
        options.max_connections(MAX_CONNECTIONS).sqlx_logging(false);

        let connection = Database::connect(options).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            DatabaseError::Connection(e.to_string())
        })?;

        tracing::info!(
            backend = ?connection.get_database_backend(),
            max_connections = MAX_CONNECTIONS,
            "Database pool ready"
        );

        let pool = Self::new(connection);

        if config.migrate {
            pool.migrate().await?;
        }

        Ok(pool)
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        Migrator::up(self.connection(), None).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to apply migrations");
            DatabaseError::Connection(e.to_string())
        })?;

        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Underlying sea-orm connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn backend(&self) -> DbBackend {
        self.connection.get_database_backend()
    }

    /// Run a read statement and return its rows in driver order
    #[tracing::instrument(skip(self, values))]
    pub async fn fetch_all(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Vec<QueryResult>, DatabaseError> {
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);
        let started = Instant::now();
        let result = self.connection.query_all(statement).await;

        self.finish(sql, started, result)
    }

    /// Run a write statement and summarise its effect
    #[tracing::instrument(skip(self, values))]
    pub async fn execute(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<WriteSummary, DatabaseError> {
        let statement = Statement::from_sql_and_values(self.backend(), sql, values);
        let started = Instant::now();
        let result = self.connection.execute(statement).await.map(|result| {
            let insert_id = match self.backend() {
                // Postgres reports generated keys through RETURNING only
                DbBackend::Postgres => 0,
                _ => result.last_insert_id(),
            };

            WriteSummary {
                affected_rows: result.rows_affected(),
                insert_id,
            }
        });

        self.finish(sql, started, result)
    }

    fn finish<T>(
        &self,
        sql: &str,
        started: Instant,
        result: Result<T, DbErr>,
    ) -> Result<T, DatabaseError> {
        let operation = operation(sql);
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(value) => {
                metrics::record_db_query(operation, "success", elapsed);
                tracing::debug!(operation, elapsed, "Database query succeeded");
                Ok(value)
            }
            Err(e) => {
                let error = DatabaseError::classify(&e);
                metrics::record_db_query(operation, "failure", elapsed);
                tracing::error!(operation, error = %e, kind = ?error, "Database query error");
                Err(error)
            }
        }
    }

    /// Round trip to the server without touching any table
    pub async fn ping(&self) -> bool {
        self.connection.ping().await.is_ok()
    }

    /// Close every connection. Outstanding clones become unusable.
    pub async fn close(self) {
        let connection = Arc::unwrap_or_clone(self.connection);

        match connection.close().await {
            Ok(()) => tracing::info!("Database pool closed"),
            Err(e) => tracing::warn!(error = %e, "Failed to close database pool"),
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("backend", &self.backend())
            .field("max_connections", &MAX_CONNECTIONS)
            .finish()
    }
}

/// Leading SQL keyword, used as the metrics label
fn operation(sql: &str) -> &'static str {
    let keyword = sql.split_whitespace().next().unwrap_or_default();

    match keyword.to_ascii_uppercase().as_str() {
        "SELECT" => "SELECT",
        "INSERT" => "INSERT",
        "UPDATE" => "UPDATE",
        "DELETE" => "DELETE",
        _ => "OTHER",
    }
}
