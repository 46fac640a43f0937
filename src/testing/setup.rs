use sea_orm::{ConnectOptions, Database};

use crate::database::DatabasePool;
use crate::models::User;
use crate::requests::user::UserFields;

/// Returns an in-memory SQLite pool with all migrations applied
///
/// The pool holds a single connection: every SQLite in-memory connection is
/// a separate database. Concurrent callers queue for it like they would for
/// a saturated production pool.
///
/// # Panics
/// Panics if the connection or the migrations fail.
///
/// # Example
/// ```ignore
/// use lighter_users::testing::setup;
///
/// #[tokio::test]
/// async fn test_something() {
///     let db = setup::database().await;
///     assert!(db.ping().await);
/// }
/// ```
pub async fn database() -> DatabasePool {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");

    let pool = DatabasePool::new(connection);

    pool.migrate().await.expect("Failed to run migrations");

    pool
}

/// Insert a user directly and return its id
pub async fn create_user(db: &DatabasePool, name: &str, email: &str) -> i64 {
    let fields = UserFields {
        name: name.to_string(),
        email: email.to_string(),
    };

    let summary = User::insert(db, &fields)
        .await
        .expect("Failed to insert user");

    summary.insert_id as i64
}
