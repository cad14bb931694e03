//! Tests for domain error construction and the serialised payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn base_error() -> Error {
    Error::validation_failed("bad")
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::validation_failed("x"), ErrorCode::ValidationFailed)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::already_exists("x"), ErrorCode::AlreadyExists)]
#[case(Error::method_not_allowed("x"), ErrorCode::MethodNotAllowed)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] code: ErrorCode) {
    assert_eq!(error.code(), code);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::ValidationFailed, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_default_for_blank_message() {
    let error = Error::new(ErrorCode::NotFound, " ");
    assert_eq!(error.message(), "Not found");
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn with_trace_id_ignores_blank_values(base_error: Error) {
    assert!(base_error.with_trace_id("").trace_id().is_none());
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let payload = json!({ "detail": "bad", "code": "validation_failed" });

    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(payload).expect("payload is valid")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_public_error_shape(expected_trace_id: String) {
    let error = Error::not_found("User not found").with_trace_id(expected_trace_id.clone());
    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(
        value,
        json!({
            "detail": "User not found",
            "code": "not_found",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
fn serialises_details_when_present() {
    let error = Error::validation_failed("bad").with_details(json!({ "fields": [] }));
    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(value["details"], json!({ "fields": [] }));
    assert!(value.get("traceId").is_none());
}

#[rstest]
fn deserialising_rejects_blank_detail() {
    let result = serde_json::from_value::<Error>(json!({ "detail": " ", "code": "not_found" }));
    assert!(result.is_err());
}
