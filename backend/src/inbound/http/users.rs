//! Users API handlers.
//!
//! ```text
//! GET    /api/users?page=1&size=50
//! POST   /api/users            {"email":"a@b.com","first_name":"A","last_name":"B","avatar":"http://x/y.png"}
//! GET    /api/users/{id}
//! GET    /api/users/{id}/detailed
//! PATCH  /api/users/{id}       {"first_name":"Ann"}
//! PUT    /api/users/{id}       full body, as for POST
//! DELETE /api/users/{id}
//! ```
//!
//! Other methods on these paths answer 405 through [`method_not_allowed`].

use actix_web::{HttpResponse, web};
use pagination::{Page, PageParams};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, FieldError, FieldErrors, SupportInfo, User, UserDraft, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DetailedUserSchema, ErrorSchema, UserPageSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_page_request, parse_user_id};

/// Confirmation message returned by `DELETE /api/users/{id}`.
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Body for `POST /api/users` and `PUT /api/users/{id}`.
///
/// Fields are optional at the wire level so that every missing field is
/// reported at once instead of failing on the first.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Client-chosen id; honoured on create, ignored on replace.
    pub id: Option<i64>,
    /// Contact email.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
}

fn required(errors: &mut FieldErrors, field: &str, value: Option<String>) -> String {
    value.unwrap_or_else(|| {
        errors.push(FieldError::new(field, "required", format!("{field} is required")));
        String::new()
    })
}

impl UserRequest {
    fn into_draft(self) -> Result<UserDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        let draft = UserDraft {
            id: self.id,
            email: required(&mut errors, "email", self.email),
            first_name: required(&mut errors, "first_name", self.first_name),
            last_name: required(&mut errors, "last_name", self.last_name),
            avatar: required(&mut errors, "avatar", self.avatar),
        };
        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

/// Body for `PATCH /api/users/{id}`; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserPatchRequest {
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement avatar URL.
    pub avatar: Option<String>,
}

impl From<UserPatchRequest> for UserPatch {
    fn from(request: UserPatchRequest) -> Self {
        Self {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            avatar: request.avatar,
        }
    }
}

/// Response of `GET /api/users/{id}/detailed`.
#[derive(Debug, Serialize)]
pub struct DetailedUserResponse {
    /// The requested user.
    pub data: User,
    /// Static support block.
    pub support: SupportInfo,
}

/// Response of `DELETE /api/users/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    /// Confirmation text.
    #[schema(example = "User deleted")]
    pub message: String,
}

/// List users one page at a time.
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number", minimum = 1),
        ("size" = Option<i64>, Query, description = "Page size", minimum = 1, maximum = 100)
    ),
    responses(
        (status = 200, description = "One page of users", body = UserPageSchema),
        (status = 422, description = "Invalid paging parameters", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<Page<User>>> {
    let request = parse_page_request(params.into_inner())?;
    Ok(web::Json(state.query.list_users(request).await?))
}

/// Create a user; the id is assigned when omitted.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Id already taken", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = payload.into_inner().into_draft()?.validate_new()?;
    let user = state.command.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user id")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 422, description = "Malformed id", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    Ok(web::Json(state.query.get_user(id).await?))
}

/// Fetch one user wrapped with the support block.
#[utoipa::path(
    get,
    path = "/api/users/{id}/detailed",
    params(("id" = i64, Path, description = "Positive user id")),
    responses(
        (status = 200, description = "User and support information", body = DetailedUserSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 422, description = "Malformed id", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserDetailed"
)]
pub async fn get_user_detailed(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DetailedUserResponse>> {
    let id = parse_user_id(path.into_inner())?;
    let data = state.query.get_user(id).await?;
    Ok(web::Json(DetailedUserResponse {
        data,
        support: SupportInfo::default(),
    }))
}

/// Change the supplied fields of a user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user id")),
    request_body = UserPatchRequest,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPatchRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let changes = UserPatch::from(payload.into_inner()).validate()?;
    Ok(web::Json(state.command.update_user(id, changes).await?))
}

/// Replace every field of a user; any `id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Replaced user", body = UserSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let profile = payload.into_inner().into_draft()?.validate_replacement()?;
    Ok(web::Json(state.command.replace_user(id, profile).await?))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Positive user id")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 422, description = "Malformed id", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = parse_user_id(path.into_inner())?;
    state.command.delete_user(id).await?;
    Ok(web::Json(DeletedResponse {
        message: USER_DELETED_MESSAGE.to_owned(),
    }))
}

/// Fallback for unsupported methods on user resources.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("Method not allowed"))
}
