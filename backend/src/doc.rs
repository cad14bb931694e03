//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (users,
//! status, health) and the schema wrappers that describe domain types
//! without coupling them to utoipa. The document is served by Swagger UI in
//! debug builds.

use crate::inbound::http::schemas::{
    DetailedUserSchema, ErrorCodeSchema, ErrorSchema, ServiceStatusSchema, SupportSchema,
    UserPageSchema, UserSchema,
};
use crate::inbound::http::users::{DeletedResponse, UserPatchRequest, UserRequest};
use utoipa::openapi::header::HeaderBuilder;
use utoipa::openapi::schema::{ObjectBuilder, Type};
use utoipa::{Modify, OpenApi};

/// Document the `trace-id` response header on every operation.
struct TraceHeaderAddon;

impl Modify for TraceHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let header = HeaderBuilder::new()
            .schema(ObjectBuilder::new().schema_type(Type::String))
            .description(Some("Request correlation identifier"))
            .build();

        for item in openapi.paths.paths.values_mut() {
            let operations = [
                item.get.as_mut(),
                item.post.as_mut(),
                item.put.as_mut(),
                item.patch.as_mut(),
                item.delete.as_mut(),
            ];
            for operation in operations.into_iter().flatten() {
                for response in operation.responses.responses.values_mut() {
                    if let utoipa::openapi::RefOr::T(response) = response {
                        response
                            .headers
                            .insert("trace-id".to_owned(), header.clone());
                    }
                }
            }
        }
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&TraceHeaderAddon),
    info(
        title = "Users API",
        description = "User directory with paginated listing, storage status, and health probes.",
        license(
            name = "MIT",
            url = "https://opensource.org/license/mit"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_user_detailed,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::status::get_status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserPageSchema,
        DetailedUserSchema,
        SupportSchema,
        ServiceStatusSchema,
        ErrorSchema,
        ErrorCodeSchema,
        UserRequest,
        UserPatchRequest,
        DeletedResponse,
    )),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "status", description = "Storage connectivity"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
