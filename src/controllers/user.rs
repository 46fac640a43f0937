use actix_web::Responder;
use actix_web::web::{Bytes, Data, Json, Path};

use crate::database::DatabasePool;
use crate::models::User;
use crate::requests::user::UserRequest;
use crate::responses::Message;
use crate::responses::user::UserStored;
use crate::services;

/// List users, newest first
#[utoipa::path(
    tag = "User",
    responses(
        (status = 200, description = "All users, newest id first", body = Vec<User>),
        (status = 500, description = "Query failed", body = Message),
    ),
)]
#[get("/api/users")]
pub async fn index(db: Data<DatabasePool>) -> impl Responder {
    services::user::index::index(&db).await
}

/// Store new user
///
/// Fail if
/// - name or email is missing or empty
/// - email is malformed
/// - email already exists
#[utoipa::path(
    tag = "User",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserStored),
        (status = 400, description = "Missing fields or malformed email", body = Message),
        (status = 409, description = "Email already exists", body = Message),
        (status = 500, description = "Query failed", body = Message),
    ),
)]
#[post("/api/users")]
pub async fn store(db: Data<DatabasePool>, Json(request): Json<UserRequest>) -> impl Responder {
    services::user::store::store(&db, request).await
}

/// Update user by id
///
/// The id is resolved before the body is decoded.
///
/// Fail if
/// - id has no leading integer
/// - body is not a JSON object
/// - name or email is missing or empty
/// - user not found
#[utoipa::path(
    tag = "User",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = Message),
        (status = 400, description = "Invalid id, malformed body, missing fields or malformed email", body = Message),
        (status = 404, description = "User not found", body = Message),
        (status = 500, description = "Query failed", body = Message),
    ),
)]
#[put("/api/users/{id}")]
pub async fn update(
    db: Data<DatabasePool>,
    id: Path<String>,
    body: Bytes,
) -> impl Responder {
    services::user::update::update(&db, &id, &body).await
}

/// Delete user by id
///
/// Fail if
/// - id is not an integer
/// - user not found
#[utoipa::path(
    tag = "User",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = Message),
        (status = 400, description = "Invalid id", body = Message),
        (status = 404, description = "User not found", body = Message),
        (status = 500, description = "Query failed", body = Message),
    ),
)]
#[delete("/api/users/{id}")]
pub async fn delete(db: Data<DatabasePool>, id: Path<String>) -> impl Responder {
    services::user::delete::delete(&db, &id).await
}
