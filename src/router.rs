use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use actix_web::web::{self, Data, JsonConfig, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::errors::{Error, INVALID_REQUEST_BODY};
use crate::metrics::AppMetrics;

pub fn route(app: &mut ServiceConfig) {
    app.app_data(Data::new(AppMetrics::new()));
    app.app_data(JsonConfig::default().error_handler(json_error));
    app.service(controllers::home::index);
    // User
    app.service(controllers::user::index);
    app.service(controllers::user::store);
    app.service(controllers::user::update);
    app.service(controllers::user::delete);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);
}

/// Swagger UI and the OpenAPI document, registered after [`route`]
pub fn docs(app: &mut ServiceConfig) {
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Users", "/api.json"),
        Definition::openapi(),
    )]));
}

fn json_error(error: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    ::tracing::debug!(error = %error, "Rejected request body");

    Error::bad_request(INVALID_REQUEST_BODY).into()
}
