use actix_web::web::Json;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::Error;
use crate::models::User;
use crate::requests::user::parse_id;
use crate::responses::Message;

#[::tracing::instrument(skip(db))]
pub async fn delete(db: &DatabasePool, id: &str) -> Result<Json<Message>, Error> {
    let id = parse_id(id).map_err(|e| Error::bad_request(e.to_string()))?;

    User::delete(db, id).await.map_err(|e| match e {
        DatabaseError::NotFound => Error::not_found("User not found"),
        _ => Error::internal("Failed to delete user"),
    })?;

    ::tracing::info!(user_id = id, "User deleted successfully");

    Ok(Json(Message::new("User deleted successfully")))
}
