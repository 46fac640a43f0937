use utoipa::OpenApi;

use crate::{controllers, database, models, requests, responses};

#[derive(OpenApi)]
#[openapi(
    info(title = "lighter-users", description = "CRUD API over the users table"),
    tags(
        (name = "User"),
        (name = "Health"),
    ),
    paths(
        controllers::user::index,
        controllers::user::store,
        controllers::user::update,
        controllers::user::delete,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::user::UserRequest,

        models::user::User,
        responses::Message,
        responses::user::UserStored,
        database::WriteSummary,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
