//! Registration orchestration.
//!
//! Steps run strictly in order: detect the face, apply the liveness gate,
//! upload the image, insert the user row. The first failure ends the flow.
//! When the insert fails after an upload, the orphaned asset is discarded on
//! a best-effort basis; the discard outcome never changes the returned error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::error_mapping::{map_asset_error, map_recognition_error, map_user_persistence_error};
use super::ports::{AssetStore, FaceRecognition, RegistrationService, StoredAsset, UserRepository};
use super::{
    DetectionResult, Error, FacialImage, LivenessPolicy, NewUser, RegistrationReceipt,
    RegistrationRequest,
};

/// Registration service implementing the [`RegistrationService`] driving port.
#[derive(Clone)]
pub struct RegistrationOrchestrator<R, A, U> {
    recognition: Arc<R>,
    assets: Arc<A>,
    users: Arc<U>,
    liveness: LivenessPolicy,
}

impl<R, A, U> RegistrationOrchestrator<R, A, U> {
    /// Create an orchestrator with the liveness gate disabled.
    pub fn new(recognition: Arc<R>, assets: Arc<A>, users: Arc<U>) -> Self {
        Self {
            recognition,
            assets,
            users,
            liveness: LivenessPolicy::disabled(),
        }
    }

    /// Replace the liveness policy applied to detection results.
    #[must_use]
    pub fn with_liveness_policy(mut self, liveness: LivenessPolicy) -> Self {
        self.liveness = liveness;
        self
    }
}

impl<R, A, U> RegistrationOrchestrator<R, A, U>
where
    R: FaceRecognition,
    A: AssetStore,
    U: UserRepository,
{
    async fn detect_face(&self, image: &FacialImage) -> Result<DetectionResult, Error> {
        let detection = self.recognition.detect(image).await.map_err(|err| {
            warn!(error = %err, "face detection failed");
            map_recognition_error(err)
        })?;
        debug!(
            status = %detection.status,
            is_real = detection.is_real,
            antispoof_score = detection.antispoof_score,
            "face detected"
        );
        Ok(detection)
    }

    fn check_liveness(&self, detection: &DetectionResult) -> Result<(), Error> {
        self.liveness.evaluate(detection).map_err(|rejection| {
            warn!(reason = %rejection, "liveness gate rejected image");
            Error::liveness_rejected(format!("Liveness check failed: {rejection}"))
        })
    }

    async fn upload_image(&self, image: &FacialImage) -> Result<StoredAsset, Error> {
        let asset = self.assets.upload(image).await.map_err(|err| {
            warn!(error = %err, "reference image upload failed");
            map_asset_error(err)
        })?;
        debug!(public_id = %asset.public_id, "reference image uploaded");
        Ok(asset)
    }

    async fn discard_orphan(&self, asset: &StoredAsset) {
        match self.assets.discard(asset).await {
            Ok(()) => debug!(public_id = %asset.public_id, "orphaned reference image discarded"),
            Err(err) => warn!(
                public_id = %asset.public_id,
                error = %err,
                "failed to discard orphaned reference image"
            ),
        }
    }
}

#[async_trait]
impl<R, A, U> RegistrationService for RegistrationOrchestrator<R, A, U>
where
    R: FaceRecognition,
    A: AssetStore,
    U: UserRepository,
{
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationReceipt, Error> {
        let detection = self.detect_face(request.facial_image()).await?;
        self.check_liveness(&detection)?;
        let asset = self.upload_image(request.facial_image()).await?;

        let new_user = NewUser {
            email: request.email().to_owned(),
            first_name: request.first_name().to_owned(),
            last_name: request.last_name().to_owned(),
            reference_image_url: asset.secure_url.clone(),
        };
        match self.users.create(&new_user).await {
            Ok(user_id) => {
                info!(user_id = %user_id, "user registered");
                Ok(RegistrationReceipt {
                    user_id,
                    reference_image_url: asset.secure_url,
                })
            }
            Err(err) => {
                warn!(error = %err, "user insert failed");
                self.discard_orphan(&asset).await;
                Err(map_user_persistence_error(err))
            }
        }
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
