//! Tests for error construction and the JSON payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::conflict("x"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(ErrorCode::NotFound, "not found")]
#[case(ErrorCode::Conflict, "already exists")]
#[case(ErrorCode::InternalError, "internal error")]
fn blank_messages_fall_back_per_code(#[case] code: ErrorCode, #[case] expected: &str) {
    assert_eq!(Error::new(code, " \t").message(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn blank_trace_ids_are_rejected_or_ignored(expected_trace_id: String) {
    let tagged = Error::invalid_request("bad").with_trace_id(expected_trace_id);
    assert_eq!(
        tagged.clone().try_with_trace_id(" "),
        Err(ErrorValidationError::EmptyTraceId)
    );
    assert_eq!(tagged.with_trace_id("").trace_id(), Some(TRACE_ID));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn constructors_capture_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid uuid fixture");
    let error = TraceId::scope(trace_id, async move { Error::conflict("email taken") }).await;
    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_payload(expected_trace_id: String) {
    let error = Error::not_found("package 7 not found")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"packageId": 7}));

    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "not_found",
            "message": "package 7 not found",
            "details": {"packageId": 7},
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn optional_fields_are_omitted() {
    let value = serde_json::to_value(Error::unauthorized("login required")).expect("serialise");
    assert_eq!(
        value,
        json!({"code": "unauthorized", "message": "login required"})
    );
}
