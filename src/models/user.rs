use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::{DatabaseError, DatabasePool, WriteSummary};
use crate::requests::user::UserFields;

pub const SELECT_ALL: &str = "SELECT id, name, email FROM users ORDER BY id DESC";
pub const INSERT: &str = "INSERT INTO users (name, email) VALUES (?, ?)";
pub const UPDATE: &str = "UPDATE users SET name = ?, email = ? WHERE id = ?";
pub const DELETE: &str = "DELETE FROM users WHERE id = ?";

/// Row of the `users` table
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, FromQueryResult, PartialEq, Eq)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl User {
    /// Every user, newest id first
    pub async fn all(db: &DatabasePool) -> Result<Vec<Self>, DatabaseError> {
        let rows = db.fetch_all(SELECT_ALL, vec![]).await?;

        rows.iter()
            .map(|row| {
                Self::from_query_result(row, "").map_err(|e| {
                    ::tracing::error!(error = %e, "Failed to decode user row");
                    DatabaseError::QueryFailed
                })
            })
            .collect()
    }

    /// Insert a row, the store assigns the id
    pub async fn insert(
        db: &DatabasePool,
        fields: &UserFields,
    ) -> Result<WriteSummary, DatabaseError> {
        db.execute(
            INSERT,
            vec![fields.name.clone().into(), fields.email.clone().into()],
        )
        .await
    }

    /// Overwrite name and email of `id`. Fails with `NotFound` when no row matched.
    pub async fn update(
        db: &DatabasePool,
        id: i64,
        fields: &UserFields,
    ) -> Result<WriteSummary, DatabaseError> {
        let summary = db
            .execute(
                UPDATE,
                vec![
                    fields.name.clone().into(),
                    fields.email.clone().into(),
                    id.into(),
                ],
            )
            .await?;

        if summary.affected_rows == 0 {
            return Err(DatabaseError::NotFound);
        }

        Ok(summary)
    }

    /// Remove `id`. Fails with `NotFound` when no row matched.
    pub async fn delete(db: &DatabasePool, id: i64) -> Result<WriteSummary, DatabaseError> {
        let summary = db.execute(DELETE, vec![id.into()]).await?;

        if summary.affected_rows == 0 {
            return Err(DatabaseError::NotFound);
        }

        Ok(summary)
    }
}
