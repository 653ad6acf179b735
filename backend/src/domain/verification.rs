//! Verification orchestration: look the user up, then ask the face-analysis
//! service to compare. The comparison verdict is returned as reported.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::error_mapping::{map_recognition_error, map_user_persistence_error};
use super::ports::{FaceRecognition, UserRepository, VerificationService};
use super::{ComparisonResult, Error, RegisteredFace, VerificationRequest};

pub(crate) const USER_UNKNOWN_MESSAGE: &str = "User account doesn't exist";

/// Verification service implementing the [`VerificationService`] driving port.
#[derive(Clone)]
pub struct VerificationOrchestrator<R, U> {
    recognition: Arc<R>,
    users: Arc<U>,
}

impl<R, U> VerificationOrchestrator<R, U> {
    /// Create an orchestrator over the given collaborators.
    pub fn new(recognition: Arc<R>, users: Arc<U>) -> Self {
        Self { recognition, users }
    }
}

impl<R, U> VerificationOrchestrator<R, U>
where
    R: FaceRecognition,
    U: UserRepository,
{
    async fn lookup(&self, email: &str) -> Result<RegisteredFace, Error> {
        let found = self.users.find_by_email(email).await.map_err(|err| {
            warn!(error = %err, "user lookup failed");
            map_user_persistence_error(err)
        })?;
        found.ok_or_else(|| Error::user_unknown(USER_UNKNOWN_MESSAGE))
    }
}

#[async_trait]
impl<R, U> VerificationService for VerificationOrchestrator<R, U>
where
    R: FaceRecognition,
    U: UserRepository,
{
    async fn verify(&self, request: &VerificationRequest) -> Result<ComparisonResult, Error> {
        let face = self.lookup(request.email()).await?;
        let result = self
            .recognition
            .compare(&face.reference_image_url, request.facial_image())
            .await
            .map_err(|err| {
                warn!(user_id = %face.user_id, error = %err, "face comparison failed");
                map_recognition_error(err)
            })?;
        info!(
            user_id = %face.user_id,
            is_match = result.is_match,
            distance = result.distance,
            "verification completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "verification_tests.rs"]
mod tests;
