//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the gateway endpoints, the health probes and the
//! request, response and error schemas. Swagger UI serves it in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::registration::{RegisterRequestBody, RegistrationResponse};
use crate::inbound::http::verification::{VerificationResponse, VerifyRequestBody};

/// OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "facegate",
        description = "Identity-verification gateway: face registration and verification."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registration::register,
        crate::inbound::http::verification::verify,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        RegisterRequestBody,
        RegistrationResponse,
        VerifyRequestBody,
        VerificationResponse
    )),
    tags(
        (name = "registration", description = "Register a person by face"),
        (name = "verification", description = "Verify a face against a registered person"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
