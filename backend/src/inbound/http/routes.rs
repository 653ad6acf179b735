//! Route table for the gateway endpoints.
//!
//! Both endpoints accept POST only; any other method reaches
//! [`method_not_allowed`]. The JSON extractor is configured here so decode
//! failures and oversized bodies render as `invalid_payload`.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, ResponseError, web};
use tracing::warn;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::registration::register;
use crate::inbound::http::verification::verify;

/// Default request body limit; encoded images are large.
pub const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;

const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Unaccepted method";

/// JSON extractor configuration shared by the gateway endpoints.
///
/// Bodies are decoded whatever their declared content type.
#[must_use]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!(error = %err, "rejecting undecodable request body");
            let response = Error::invalid_payload(INVALID_PAYLOAD_MESSAGE).error_response();
            InternalError::from_response(err, response).into()
        })
}

/// Fallback for non-POST requests on gateway paths.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE))
}

/// Register `/register` and `/verify` on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use facegate::inbound::http::routes::{configure_gateway, DEFAULT_JSON_LIMIT};
///
/// let _app = App::new().configure(|cfg| configure_gateway(cfg, DEFAULT_JSON_LIMIT));
/// ```
pub fn configure_gateway(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(json_config(json_limit))
        .service(
            web::resource("/register")
                .route(web::post().to(register))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/verify")
                .route(web::post().to(verify))
                .default_service(web::to(method_not_allowed)),
        );
}
