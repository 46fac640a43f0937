use actix_web::HttpResponse;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::Error;
use crate::models::User;
use crate::requests::user::UserRequest;
use crate::responses::user::UserStored;

#[::tracing::instrument(skip(db, request))]
pub async fn store(db: &DatabasePool, request: UserRequest) -> Result<HttpResponse, Error> {
    let fields = request
        .validate()
        .map_err(|e| Error::bad_request(e.to_string()))?;

    let result = User::insert(db, &fields).await.map_err(|e| match e {
        DatabaseError::DuplicateKey => {
            ::tracing::info!(email = %fields.email, "Rejected duplicate email");
            Error::conflict("Email already exists")
        }
        _ => Error::internal("Failed to add user"),
    })?;

    ::tracing::info!(user_id = result.insert_id, "User created successfully");

    Ok(HttpResponse::Created().json(UserStored {
        message: "User added successfully".to_string(),
        result,
    }))
}
