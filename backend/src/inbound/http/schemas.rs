//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their JSON shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// One or more fields failed validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A user with the supplied id already exists.
    #[schema(rename = "already_exists")]
    AlreadyExists,
    /// The HTTP method is not supported on this path.
    #[schema(rename = "method_not_allowed")]
    MethodNotAllowed,
    /// User storage is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "User not found")]
    detail: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Supplementary details; validation failures list rejected fields.
    #[schema(value_type = Option<Object>)]
    details: Option<serde_json::Value>,
    /// Request trace identifier, echoed in the `Trace-Id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Positive user identifier.
    #[schema(example = 1)]
    id: i64,
    /// Contact email.
    #[schema(example = "george.bluth@reqres.in")]
    email: String,
    /// Given name.
    #[schema(example = "George")]
    first_name: String,
    /// Family name.
    #[schema(example = "Bluth")]
    last_name: String,
    /// Avatar image URL.
    #[schema(example = "https://reqres.in/img/faces/1-image.jpg")]
    avatar: String,
}

/// OpenAPI schema for a page of users.
#[derive(ToSchema)]
#[schema(as = UserPage)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserPageSchema {
    /// Users on this page.
    items: Vec<UserSchema>,
    /// 1-based page number.
    #[schema(example = 1)]
    page: u32,
    /// Requested page size.
    #[schema(example = 50)]
    size: u32,
    /// Number of stored users.
    #[schema(example = 12)]
    total: u64,
    /// Number of pages at this size.
    #[schema(example = 1)]
    pages: u64,
}

/// OpenAPI schema for [`crate::domain::SupportInfo`].
#[derive(ToSchema)]
#[schema(as = Support)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct SupportSchema {
    /// Support page.
    url: String,
    /// Call to action.
    text: String,
}

/// OpenAPI schema for the detailed user envelope.
#[derive(ToSchema)]
#[schema(as = DetailedUser)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DetailedUserSchema {
    /// The requested user.
    data: UserSchema,
    /// Static support block.
    support: SupportSchema,
}

/// OpenAPI schema for [`crate::domain::ServiceStatus`].
#[derive(ToSchema)]
#[schema(as = ServiceStatus)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ServiceStatusSchema {
    /// Whether user storage answered a ping.
    database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        for code in [
            "invalid_request",
            "validation_failed",
            "not_found",
            "already_exists",
            "method_not_allowed",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("\"detail\""));
        assert!(schema_json.contains("\"traceId\""));
    }

    #[test]
    fn user_schema_has_snake_case_fields() {
        let schema_json = schema_to_json::<UserSchema>();
        assert_eq!(UserSchema::name(), "User");
        assert!(schema_json.contains("first_name"));
        assert!(schema_json.contains("last_name"));
    }
}
