//! HTTP mapping for domain errors.
//!
//! Domain errors stay transport agnostic; this module picks the status code,
//! echoes the trace id header and hides internal details from clients.

use std::fmt::Display;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

/// Message clients see in place of any internal failure.
pub const REDACTED_MESSAGE: &str = "Internal server error";

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match self.code() {
            ErrorCode::InternalError => {
                error!(message = self.message(), trace_id = ?self.trace_id(), "internal error");
                let mut redacted = Error::internal(REDACTED_MESSAGE);
                if let Some(id) = self.trace_id() {
                    redacted = redacted.with_trace_id(id.to_owned());
                }
                builder.json(redacted)
            }
            ErrorCode::ServiceUnavailable => {
                warn!(message = self.message(), trace_id = ?self.trace_id(), "dependency unavailable");
                builder.json(self)
            }
            _ => builder.json(self),
        }
    }
}

/// Reject a form field with a `400` naming the field.
pub fn invalid_field(field: &'static str, reason: impl Display) -> Error {
    Error::invalid_request(reason.to_string()).with_details(json!({
        "field": field,
        "code": "invalid_field",
    }))
}

/// Extractor rejection (malformed form or JSON body) as a `400` error body.
pub fn payload_error(reason: impl Display) -> actix_web::Error {
    Error::invalid_request(format!("malformed request body: {reason}")).into()
}
