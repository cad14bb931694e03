//! Request validation at the HTTP edge.
//!
//! Extractor failures (malformed JSON, wrong JSON types, bad query strings,
//! non-numeric path ids) are converted into the same `validation_failed`
//! payload the domain produces, so clients see one error shape for every
//! rejected input.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use pagination::{PageParams, PageRequest, PageRequestError};
use tracing::debug;

use crate::domain::{Error, FieldError, FieldErrors, UserId};

const BODY_FIELD: &str = "body";
const QUERY_FIELD: &str = "query";
const ID_FIELD: &str = "id";

fn single_field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    FieldErrors::from(FieldError::new(field, code, message)).into_error()
}

fn json_error(err: JsonPayloadError) -> Error {
    debug!(error = %err, "rejected JSON body");
    match err {
        JsonPayloadError::Deserialize(inner) => {
            single_field_error(BODY_FIELD, "invalid_body", inner.to_string())
        }
        JsonPayloadError::ContentType => single_field_error(
            BODY_FIELD,
            "unsupported_content_type",
            "expected an application/json body",
        ),
        other => single_field_error(BODY_FIELD, "unreadable_body", other.to_string()),
    }
}

fn query_error(err: QueryPayloadError) -> Error {
    debug!(error = %err, "rejected query string");
    single_field_error(QUERY_FIELD, "invalid_query", err.to_string())
}

fn path_error(err: PathError) -> Error {
    debug!(error = %err, "rejected path parameter");
    single_field_error(ID_FIELD, "invalid_id", "id must be a positive integer")
}

/// JSON body extractor settings that report failures as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| json_error(err).into())
}

/// Query-string extractor settings that report failures as validation errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| query_error(err).into())
}

/// Path extractor settings that report failures as validation errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| path_error(err).into())
}

/// Validate a raw path id.
pub(crate) fn parse_user_id(raw: i64) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| FieldErrors::from(FieldError::from(err)).into_error())
}

fn page_field_error(err: PageRequestError) -> FieldError {
    FieldError::new(err.field(), "out_of_range", err.to_string())
}

/// Validate `page`/`size` query parameters.
pub(crate) fn parse_page_request(params: PageParams) -> Result<PageRequest, Error> {
    PageRequest::try_from(params).map_err(|err| FieldErrors::from(page_field_error(err)).into_error())
}
