use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Classified database failure
///
/// The driver error is logged where it happens and is never carried here, so
/// callers match on the kind only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    /// A unique constraint rejected the statement
    #[error("Duplicate key")]
    DuplicateKey,

    /// The statement addressed a row that does not exist
    #[error("Record not found")]
    NotFound,

    /// Any other execution failure
    #[error("Database query failed")]
    QueryFailed,

    /// The pool could not be built or migrated
    #[error("Database connection error: {0}")]
    Connection(String),
}

impl DatabaseError {
    /// Classify an execution failure reported by the driver
    pub fn classify(error: &DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DatabaseError::DuplicateKey,
            _ => DatabaseError::QueryFailed,
        }
    }
}
