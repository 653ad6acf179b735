//! Reqwest-backed face-analysis adapter.
//!
//! This adapter owns transport details only: JSON request bodies, timeout and
//! status mapping, and decoding into domain results. It makes one attempt per
//! call and never retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::dto::{CompareRequestDto, CompareResponseDto, DetectRequestDto, DetectResponseDto};
use crate::domain::ports::{FaceRecognition, RecognitionError};
use crate::domain::{ComparisonResult, DetectionResult, FacialImage};
use crate::outbound::http_support::{as_directory, body_preview};

const DETECT_PATH: &str = "detect-face";
const VERIFY_PATH: &str = "verify";

/// Construction failures for [`RecognitionHttpClient`].
#[derive(Debug, thiserror::Error)]
pub enum RecognitionClientError {
    /// The base URL cannot be extended with the service paths.
    #[error("invalid face analysis base URL: {0}")]
    Endpoint(#[from] url::ParseError),
    /// The reqwest client could not be built.
    #[error("failed to build face analysis HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Face-analysis adapter posting JSON to `<base>/detect-face` and
/// `<base>/verify`.
pub struct RecognitionHttpClient {
    client: Client,
    detect_endpoint: Url,
    verify_endpoint: Url,
}

impl RecognitionHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoints cannot be derived from `base_url`
    /// or the reqwest client cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, RecognitionClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base = as_directory(base_url);
        Ok(Self {
            client,
            detect_endpoint: base.join(DETECT_PATH)?,
            verify_endpoint: base.join(VERIFY_PATH)?,
        })
    }

    async fn post_json<B, T>(&self, endpoint: &Url, body: &B) -> Result<T, RecognitionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error);
        let bytes = check_status(status, bytes)?;
        decode(bytes.as_ref())
    }
}

#[async_trait]
impl FaceRecognition for RecognitionHttpClient {
    async fn detect(&self, image: &FacialImage) -> Result<DetectionResult, RecognitionError> {
        let body = DetectRequestDto {
            img: image.as_str(),
        };
        let decoded: DetectResponseDto = self.post_json(&self.detect_endpoint, &body).await?;
        Ok(decoded.into())
    }

    async fn compare(
        &self,
        reference_url: &str,
        probe: &FacialImage,
    ) -> Result<ComparisonResult, RecognitionError> {
        let body = CompareRequestDto {
            regimg: reference_url,
            verimg: probe.as_str(),
        };
        let decoded: CompareResponseDto = self.post_json(&self.verify_endpoint, &body).await?;
        Ok(decoded.into())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RecognitionError> {
    serde_json::from_slice(body).map_err(|error| {
        RecognitionError::invalid_response(format!(
            "{error} (body: {preview})",
            preview = body_preview(body)
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> RecognitionError {
    if error.is_timeout() {
        RecognitionError::unavailable(format!("request timed out: {error}"))
    } else {
        RecognitionError::unavailable(error.to_string())
    }
}

/// Anything but 200 is a remote error carrying the full body. A body that
/// cannot be read after an error status still reports that status.
fn check_status<B: AsRef<[u8]>>(
    status: StatusCode,
    body: Result<B, RecognitionError>,
) -> Result<B, RecognitionError> {
    match body {
        Ok(bytes) if status == StatusCode::OK => Ok(bytes),
        Ok(bytes) => Err(map_status_error(status, bytes.as_ref())),
        Err(_) if status != StatusCode::OK => Err(RecognitionError::remote(status.as_u16(), "")),
        Err(error) => Err(error),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecognitionError {
    RecognitionError::remote(status.as_u16(), String::from_utf8_lossy(body))
}
