//! End-to-end tests for `/api/users`

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use futures_util::future::join_all;
use lighter_users::models::User;
use lighter_users::requests::user::UserRequest;
use lighter_users::responses::Message;
use lighter_users::responses::user::UserStored;
use serde_json::json;

// =============================================================================
// CREATE THEN LIST
// =============================================================================

/// Created records come back from the list with a fresh id, newest first
#[actix_web::test]
async fn test_create_then_list() {
    let (service, _db) = lighter_users::service!();

    let mut ids = Vec::new();
    for (name, email) in [
        ("Ann", "ann@example.com"),
        ("Bob", "bob@example.com"),
        ("Cid", "cid@example.com"),
    ] {
        let req = TestRequest::post()
            .uri("/api/users")
            .set_json(UserRequest::new(name, email))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: UserStored = read_body_json(resp).await;
        ids.push(body.result.insert_id as i64);
    }

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<User> = read_body_json(resp).await;
    assert_eq!(users.len(), 3);
    assert!(
        users.windows(2).all(|pair| pair[0].id >= pair[1].id),
        "List must be ordered by id descending"
    );

    ids.reverse();
    assert_eq!(users.iter().map(|user| user.id).collect::<Vec<_>>(), ids);
    assert_eq!(users[0].name, "Cid");
    assert_eq!(users[2].email, "ann@example.com");
}

/// The list body is a bare JSON array of `{id, name, email}`
#[actix_web::test]
async fn test_list_shape() {
    let (service, db) = lighter_users::service!();
    lighter_users::testing::setup::create_user(&db, "Ann", "ann@example.com").await;

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;
    let body: serde_json::Value = read_body_json(resp).await;

    let first = &body.as_array().expect("array body")[0];
    assert!(first["id"].is_i64());
    assert_eq!(first["name"], "Ann");
    assert_eq!(first["email"], "ann@example.com");
}

/// GET on an empty table is 200 with `[]`
#[actix_web::test]
async fn test_empty_list() {
    let (service, _db) = lighter_users::service!();

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

// =============================================================================
// CONFLICTS AND VALIDATION
// =============================================================================

/// A duplicate email is a 409 and leaves the stored row untouched
#[actix_web::test]
async fn test_duplicate_email_is_conflict() {
    let (service, db) = lighter_users::service!();

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(UserRequest::new("Ann", "ann@example.com"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::CREATED);

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(UserRequest::new("Someone Else", "ann@example.com"))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Message = read_body_json(resp).await;
    assert_eq!(body.message, "Email already exists");

    let users = User::all(&db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann");
}

/// Empty name or missing email never reaches the store
#[actix_web::test]
async fn test_invalid_bodies_do_not_mutate() {
    let (service, db) = lighter_users::service!();
    let id = lighter_users::testing::setup::create_user(&db, "Ann", "ann@example.com").await;

    let bodies = [
        json!({ "name": "", "email": "new@example.com" }),
        json!({ "name": "New" }),
    ];

    for body in bodies {
        let req = TestRequest::post()
            .uri("/api/users")
            .set_json(&body)
            .to_request();
        assert_eq!(
            call_service(&service, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = TestRequest::put()
            .uri(&format!("/api/users/{}", id))
            .set_json(&body)
            .to_request();
        assert_eq!(
            call_service(&service, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    let users = User::all(&db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann");
    assert_eq!(users[0].email, "ann@example.com");
}

// =============================================================================
// UPDATE AND DELETE
// =============================================================================

/// Updating a nonexistent id is 404 and inserts nothing
#[actix_web::test]
async fn test_update_nonexistent_id() {
    let (service, db) = lighter_users::service!();

    let req = TestRequest::put()
        .uri("/api/users/999999")
        .set_json(UserRequest::new("Ghost", "ghost@example.com"))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(User::all(&db).await.unwrap().is_empty());
}

/// Delete of an unknown id is 404; a real delete drops the row from the list
#[actix_web::test]
async fn test_delete_lifecycle() {
    let (service, db) = lighter_users::service!();
    let id = lighter_users::testing::setup::create_user(&db, "Ann", "ann@example.com").await;

    let req = TestRequest::delete()
        .uri(&format!("/api/users/{}", id + 1))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/api/users").to_request();
    let users: Vec<User> = read_body_json(call_service(&service, req).await).await;
    assert!(users.iter().all(|user| user.id != id));

    let req = TestRequest::delete()
        .uri(&format!("/api/users/{}", id))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}

/// Ids without a leading integer are rejected before any statement runs
#[actix_web::test]
async fn test_invalid_ids() {
    let (service, _db) = lighter_users::service!();

    for id in ["abc", "x12", "-", "%20"] {
        let req = TestRequest::delete()
            .uri(&format!("/api/users/{}", id))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "id {:?}", id);

        let body: Message = read_body_json(resp).await;
        assert_eq!(body.message, "Invalid user ID");
    }
}

/// Trailing garbage after the leading integer is ignored
#[actix_web::test]
async fn test_id_with_trailing_text_addresses_leading_integer() {
    let (service, db) = lighter_users::service!();
    let id = lighter_users::testing::setup::create_user(&db, "Ann", "ann@example.com").await;

    let req = TestRequest::put()
        .uri(&format!("/api/users/{}abc", id))
        .set_json(UserRequest::new("Anne", "anne@example.com"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::OK);

    let users = User::all(&db).await.unwrap();
    assert_eq!(users[0].id, id);
    assert_eq!(users[0].name, "Anne");

    let req = TestRequest::put()
        .uri(&format!("/api/users/{}.5", id + 1))
        .set_json(UserRequest::new("Ghost", "ghost@example.com"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// CONCURRENCY
// =============================================================================

/// Concurrent creates with distinct emails all land with distinct ids
#[actix_web::test]
async fn test_concurrent_creates() {
    let (service, db) = lighter_users::service!();
    let count = 20;

    let requests = (0..count).map(|i| {
        let req = TestRequest::post()
            .uri("/api/users")
            .set_json(UserRequest::new(
                format!("User {}", i),
                format!("user{}@example.com", i),
            ))
            .to_request();
        call_service(&service, req)
    });

    let responses = join_all(requests).await;
    assert!(
        responses
            .iter()
            .all(|resp| resp.status() == StatusCode::CREATED)
    );

    let users = User::all(&db).await.unwrap();
    assert_eq!(users.len(), count);

    let mut ids = users.iter().map(|user| user.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

// =============================================================================
// PARAMETER BINDING
// =============================================================================

/// SQL in field values is stored literally
#[actix_web::test]
async fn test_sql_in_values_is_stored_literally() {
    let (service, db) = lighter_users::service!();
    let name = "Robert'); DROP TABLE users; --";

    let req = TestRequest::post()
        .uri("/api/users")
        .set_json(UserRequest::new(name, "bobby@example.com"))
        .to_request();
    assert_eq!(call_service(&service, req).await.status(), StatusCode::CREATED);

    let users = User::all(&db).await.expect("users table must survive");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, name);
}
