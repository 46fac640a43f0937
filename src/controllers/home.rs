use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

const PAGE: &str = include_str!("../../static/index.html");

/// Browser UI for the users API
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(PAGE)
}
