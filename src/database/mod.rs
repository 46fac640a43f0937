//! Database access
//!
//! [`DatabasePool`] owns the bounded connection pool and executes exactly one
//! parameterized statement per call. Failures are classified into
//! [`DatabaseError`] kinds before they leave this module.

mod error;
mod pool;

pub use error::DatabaseError;
pub use pool::{DatabasePool, WriteSummary};
