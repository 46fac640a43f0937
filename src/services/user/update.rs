use actix_web::web::Json;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::{Error, INVALID_REQUEST_BODY};
use crate::models::User;
use crate::requests::user::{UserRequest, parse_id};
use crate::responses::Message;

/// Overwrite name and email of an existing user
///
/// The id is checked before the body is decoded. Uniqueness violations are
/// not singled out here and surface as 500.
#[::tracing::instrument(skip(db, body))]
pub async fn update(db: &DatabasePool, id: &str, body: &[u8]) -> Result<Json<Message>, Error> {
    let id = parse_id(id).map_err(|e| Error::bad_request(e.to_string()))?;
    let request = serde_json::from_slice::<UserRequest>(body).map_err(|e| {
        ::tracing::debug!(error = %e, "Rejected request body");
        Error::bad_request(INVALID_REQUEST_BODY)
    })?;
    let fields = request
        .validate()
        .map_err(|e| Error::bad_request(e.to_string()))?;

    User::update(db, id, &fields).await.map_err(|e| match e {
        DatabaseError::NotFound => Error::not_found("User not found"),
        _ => Error::internal("Failed to update user"),
    })?;

    ::tracing::info!(user_id = id, "User updated successfully");

    Ok(Json(Message::new("User updated successfully")))
}
