//! Gateway error taxonomy.
//!
//! Every failure the orchestrators can produce is expressed as an [`Error`]
//! carrying a stable [`ErrorCode`]. The type is transport agnostic; the HTTP
//! adapter decides status codes and which messages are redacted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required request field was absent or blank.
    MissingFields,
    /// The request body could not be decoded.
    InvalidPayload,
    /// The endpoint does not accept the request method.
    MethodNotAllowed,
    /// The face-analysis service could not be reached in time.
    RemoteUnavailable,
    /// The face-analysis service answered with an undecodable body.
    RemoteResponseInvalid,
    /// The face-analysis service answered with a non-success status.
    RemoteServiceError,
    /// The asset store rejected or failed the upload.
    StorageError,
    /// A user with the submitted email already exists.
    DuplicateEmail,
    /// No user is registered under the submitted email.
    UserUnknown,
    /// The liveness gate rejected the submitted image.
    LivenessRejected,
    /// The user store failed for a reason other than a duplicate email.
    RepositoryError,
    /// An unexpected failure inside the gateway.
    InternalError,
}

/// Gateway error payload.
///
/// `new` captures the trace identifier in scope, so errors built inside a
/// traced request are correlated without extra plumbing.
///
/// # Examples
/// ```
/// use facegate::domain::{Error, ErrorCode};
///
/// let err = Error::user_unknown("User account doesn't exist");
/// assert_eq!(err.code(), ErrorCode::UserUnknown);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "missing_fields")]
    code: ErrorCode,
    #[schema(example = "All fields are required")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "trace_id")]
    #[schema(example = "00000000-0000-0000-0000-000000000000")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error correlated with the trace identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, when the error was raised inside a request.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use facegate::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::remote_service_error("boom").with_details(json!({ "status": 502 }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::MissingFields`].
    pub fn missing_fields(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingFields, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidPayload`].
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPayload, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::RemoteUnavailable`].
    pub fn remote_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::RemoteResponseInvalid`].
    pub fn remote_response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteResponseInvalid, message)
    }

    /// Convenience constructor for [`ErrorCode::RemoteServiceError`].
    pub fn remote_service_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RemoteServiceError, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageError`].
    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateEmail`].
    pub fn duplicate_email(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateEmail, message)
    }

    /// Convenience constructor for [`ErrorCode::UserUnknown`].
    pub fn user_unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserUnknown, message)
    }

    /// Convenience constructor for [`ErrorCode::LivenessRejected`].
    pub fn liveness_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::LivenessRejected, message)
    }

    /// Convenience constructor for [`ErrorCode::RepositoryError`].
    pub fn repository(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RepositoryError, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
