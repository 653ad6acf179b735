//! Translation of port failures into the gateway error taxonomy.
//!
//! Both orchestrators share these so a given collaborator failure renders the
//! same way whichever flow hit it.

use serde_json::json;

use super::Error;
use super::ports::{AssetStoreError, RecognitionError, UserPersistenceError};

pub(crate) const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";
pub(crate) const STORAGE_ERROR_MESSAGE: &str = "Error uploading image to asset store";

pub(crate) fn map_recognition_error(error: RecognitionError) -> Error {
    match error {
        RecognitionError::Unavailable { message } => {
            Error::remote_unavailable(format!("face analysis service unavailable: {message}"))
        }
        RecognitionError::Remote { status, ref body } => {
            let details = json!({ "status": status, "body": body });
            Error::remote_service_error(error.to_string()).with_details(details)
        }
        RecognitionError::InvalidResponse { message } => Error::remote_response_invalid(format!(
            "face analysis service response invalid: {message}"
        )),
    }
}

pub(crate) fn map_asset_error(_error: AssetStoreError) -> Error {
    Error::storage_error(STORAGE_ERROR_MESSAGE)
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::DuplicateEmail { .. } => {
            Error::duplicate_email(DUPLICATE_EMAIL_MESSAGE)
        }
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::repository(format!("Database error: {message}"))
        }
    }
}
