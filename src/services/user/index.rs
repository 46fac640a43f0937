use actix_web::web::Json;

use crate::database::DatabasePool;
use crate::errors::Error;
use crate::models::User;

pub async fn index(db: &DatabasePool) -> Result<Json<Vec<User>>, Error> {
    let users = User::all(db)
        .await
        .map_err(|_| Error::internal("Failed to fetch users"))?;

    ::tracing::debug!(count = users.len(), "Users listed");

    Ok(Json(users))
}
