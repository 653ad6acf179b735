//! HTTP adapter mapping for gateway errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure the same JSON envelope, status mapping and `trace-id` header.
//! Store failures and internal errors are logged in full here and replaced
//! with generic text in the response body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REPOSITORY_ERROR_MESSAGE: &str = "Database error";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MissingFields | ErrorCode::InvalidPayload => StatusCode::BAD_REQUEST,
        ErrorCode::UserUnknown => StatusCode::UNAUTHORIZED,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::DuplicateEmail => StatusCode::CONFLICT,
        ErrorCode::LivenessRejected => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::RemoteUnavailable
        | ErrorCode::RemoteResponseInvalid
        | ErrorCode::RemoteServiceError
        | ErrorCode::StorageError
        | ErrorCode::RepositoryError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redaction_for(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::RepositoryError => Some(REPOSITORY_ERROR_MESSAGE),
        ErrorCode::InternalError => Some(INTERNAL_ERROR_MESSAGE),
        _ => None,
    }
}

fn redact(error: &Error) -> Error {
    let Some(message) = redaction_for(error.code()) else {
        return error.clone();
    };
    error!(
        code = ?error.code(),
        trace_id = error.trace_id().unwrap_or_default(),
        message = error.message(),
        "redacting error response"
    );
    let redacted = Error::new(error.code(), message);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to gateway error");
        Error::internal(INTERNAL_ERROR_MESSAGE)
    }
}
