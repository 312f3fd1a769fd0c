//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::get_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(schemas(User)),
    tags(
        (name = "Users", description = "User records keyed by email"),
    )
)]
pub struct ApiDoc;
