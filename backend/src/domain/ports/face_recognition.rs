//! Driven port for the external face-analysis service.
//!
//! Adapters make exactly one attempt per call. Timeouts and refused
//! connections both surface as [`RecognitionError::Unavailable`].

use async_trait::async_trait;

use crate::domain::{ComparisonResult, DetectionResult, FacialImage};

use super::define_port_error;

define_port_error! {
    /// Failures raised by face-analysis adapters.
    pub enum RecognitionError {
        /// The service could not be reached or did not answer in time.
        Unavailable { message: String } =>
            "face analysis service unavailable: {message}",
        /// The service answered with a non-success status.
        Remote { status: u16, body: String } =>
            "face analysis service returned error (status {status}): {body}",
        /// The service answered successfully but the body could not be decoded.
        InvalidResponse { message: String } =>
            "face analysis service response invalid: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaceRecognition: Send + Sync {
    /// Detect a face in `image` and report its liveness.
    async fn detect(&self, image: &FacialImage) -> Result<DetectionResult, RecognitionError>;

    /// Compare the image stored at `reference_url` with `probe`.
    async fn compare(
        &self,
        reference_url: &str,
        probe: &FacialImage,
    ) -> Result<ComparisonResult, RecognitionError>;
}

/// Fixture adapter that detects a live face in every image and matches every
/// comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFaceRecognition;

#[async_trait]
impl FaceRecognition for FixtureFaceRecognition {
    async fn detect(&self, _image: &FacialImage) -> Result<DetectionResult, RecognitionError> {
        Ok(DetectionResult {
            status: "success".to_owned(),
            is_real: true,
            antispoof_score: 1.0,
        })
    }

    async fn compare(
        &self,
        _reference_url: &str,
        _probe: &FacialImage,
    ) -> Result<ComparisonResult, RecognitionError> {
        Ok(ComparisonResult {
            is_match: true,
            distance: 0.0,
            threshold: 0.4,
            elapsed: 0.0,
        })
    }
}
