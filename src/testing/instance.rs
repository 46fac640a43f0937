/// Build the full application over a fresh in-memory database
///
/// Evaluates to `(service, db)`.
///
/// # Example
/// ```ignore
/// #[actix_web::test]
/// async fn test_list() {
///     let (service, db) = lighter_users::service!();
///     let request = actix_web::test::TestRequest::get().uri("/api/users").to_request();
///     let response = actix_web::test::call_service(&service, request).await;
///     assert!(response.status().is_success());
///     # let _ = db;
/// }
/// ```
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
