//! Verification HTTP handler.
//!
//! ```text
//! POST /verify {"email","facial_image"}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ComparisonResult, VerificationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Verification payload as submitted.
#[derive(Default, Deserialize, ToSchema)]
pub struct VerifyRequestBody {
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Base64-encoded image or data URI.
    pub facial_image: Option<String>,
}

/// Comparison verdict relayed from the face-analysis service.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerificationResponse {
    pub is_match: bool,
    #[schema(example = 0.31)]
    pub distance: f64,
    #[schema(example = 0.4)]
    pub threshold: f64,
    /// Seconds the service spent comparing.
    #[schema(example = 1.27)]
    pub time: f64,
}

impl From<ComparisonResult> for VerificationResponse {
    fn from(value: ComparisonResult) -> Self {
        Self {
            is_match: value.is_match,
            distance: value.distance,
            threshold: value.threshold,
            time: value.elapsed,
        }
    }
}

/// Verify a face against a registered user.
#[utoipa::path(
    post,
    path = "/verify",
    request_body = VerifyRequestBody,
    responses(
        (status = 200, description = "Comparison verdict", body = VerificationResponse),
        (status = 400, description = "Missing fields or undecodable body", body = crate::domain::Error),
        (status = 401, description = "No user registered under the email", body = crate::domain::Error),
        (status = 405, description = "Only POST is accepted", body = crate::domain::Error),
        (status = 500, description = "Face analysis or database failure", body = crate::domain::Error)
    ),
    tags = ["verification"],
    operation_id = "verify"
)]
pub async fn verify(
    state: web::Data<HttpState>,
    payload: web::Json<VerifyRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = VerificationRequest::try_from_parts(
        body.email.unwrap_or_default(),
        body.facial_image.unwrap_or_default(),
    )?;
    let result = state.verification.verify(&request).await?;
    Ok(HttpResponse::Ok().json(VerificationResponse::from(result)))
}
