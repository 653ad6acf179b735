//! Registration HTTP handler.
//!
//! ```text
//! POST /register {"email","first_name","last_name","facial_image"}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RegistrationRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";

/// Registration payload as submitted. Absent fields decode as `None` and are
/// rejected together with empty ones.
#[derive(Default, Deserialize, ToSchema)]
pub struct RegisterRequestBody {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    /// Base64-encoded image or data URI.
    pub facial_image: Option<String>,
}

impl RegisterRequestBody {
    fn into_request(self) -> Result<RegistrationRequest, crate::domain::IntakeError> {
        RegistrationRequest::try_from_parts(
            self.email.unwrap_or_default(),
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.facial_image.unwrap_or_default(),
        )
    }
}

/// Body returned once the user row exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    #[schema(example = "Registration successful!")]
    pub message: String,
}

/// Register a person by face.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequestBody,
    responses(
        (status = 201, description = "User registered", body = RegistrationResponse),
        (status = 400, description = "Missing fields or undecodable body", body = crate::domain::Error),
        (status = 405, description = "Only POST is accepted", body = crate::domain::Error),
        (status = 409, description = "Email already registered", body = crate::domain::Error),
        (status = 422, description = "Liveness gate rejected the image", body = crate::domain::Error),
        (status = 500, description = "Face analysis, storage or database failure", body = crate::domain::Error)
    ),
    tags = ["registration"],
    operation_id = "register"
)]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_request()?;
    state.registration.register(&request).await?;
    Ok(HttpResponse::Created().json(RegistrationResponse {
        message: REGISTRATION_SUCCESS_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn absent_fields_are_missing_fields() {
        let body = RegisterRequestBody {
            email: Some("ada@example.com".to_owned()),
            ..RegisterRequestBody::default()
        };
        assert!(body.into_request().is_err());
    }

    #[rstest]
    fn complete_body_converts() {
        let body: RegisterRequestBody = serde_json::from_str(
            r#"{"email":"ada@example.com","first_name":"Ada","last_name":"Lovelace","facial_image":"aGk="}"#,
        )
        .expect("decode body");
        let request = body.into_request().expect("valid request");
        assert_eq!(request.first_name(), "Ada");
    }
}
