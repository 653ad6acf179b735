//! Recording doubles for the driven ports.
//!
//! Each double keeps its call log behind an `Arc<Mutex<_>>` so a test can
//! hand one clone to an orchestrator and inspect another afterwards.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use facegate::domain::ports::{
    AssetStore, AssetStoreError, FaceRecognition, RecognitionError, StoredAsset,
    UserPersistenceError, UserRepository,
};
use facegate::domain::{
    ComparisonResult, DetectionResult, FacialImage, NewUser, RegisteredFace, UserId,
};

/// Detection verdict for a live face.
pub(crate) fn live_detection() -> DetectionResult {
    DetectionResult {
        status: "success".to_owned(),
        is_real: true,
        antispoof_score: 0.98,
    }
}

/// Comparison verdict reported for a matching pair.
pub(crate) fn matching_comparison() -> ComparisonResult {
    ComparisonResult {
        is_match: true,
        distance: 0.2,
        threshold: 0.4,
        elapsed: 0.1,
    }
}

/// Face-analysis double with scripted replies.
///
/// Queued replies are consumed first; once a queue is empty the double
/// answers with [`live_detection`] or [`matching_comparison`].
#[derive(Clone, Default)]
pub(crate) struct ScriptedFaceRecognition {
    detections: Arc<Mutex<VecDeque<Result<DetectionResult, RecognitionError>>>>,
    comparisons: Arc<Mutex<VecDeque<Result<ComparisonResult, RecognitionError>>>>,
    detect_calls: Arc<Mutex<Vec<String>>>,
    compare_calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedFaceRecognition {
    pub(crate) fn push_detection(&self, reply: Result<DetectionResult, RecognitionError>) {
        self.detections
            .lock()
            .expect("detections lock")
            .push_back(reply);
    }

    pub(crate) fn push_comparison(&self, reply: Result<ComparisonResult, RecognitionError>) {
        self.comparisons
            .lock()
            .expect("comparisons lock")
            .push_back(reply);
    }

    /// Images passed to `detect`, in call order.
    pub(crate) fn detect_calls(&self) -> Vec<String> {
        self.detect_calls.lock().expect("detect calls lock").clone()
    }

    /// `(reference_url, probe)` pairs passed to `compare`, in call order.
    pub(crate) fn compare_calls(&self) -> Vec<(String, String)> {
        self.compare_calls.lock().expect("compare calls lock").clone()
    }
}

#[async_trait]
impl FaceRecognition for ScriptedFaceRecognition {
    async fn detect(&self, image: &FacialImage) -> Result<DetectionResult, RecognitionError> {
        self.detect_calls
            .lock()
            .expect("detect calls lock")
            .push(image.as_str().to_owned());
        self.detections
            .lock()
            .expect("detections lock")
            .pop_front()
            .unwrap_or_else(|| Ok(live_detection()))
    }

    async fn compare(
        &self,
        reference_url: &str,
        probe: &FacialImage,
    ) -> Result<ComparisonResult, RecognitionError> {
        self.compare_calls
            .lock()
            .expect("compare calls lock")
            .push((reference_url.to_owned(), probe.as_str().to_owned()));
        self.comparisons
            .lock()
            .expect("comparisons lock")
            .pop_front()
            .unwrap_or_else(|| Ok(matching_comparison()))
    }
}

/// Asset store double that hands out sequential CDN URLs.
#[derive(Clone, Default)]
pub(crate) struct RecordingAssetStore {
    uploads: Arc<Mutex<Vec<StoredAsset>>>,
    discards: Arc<Mutex<Vec<StoredAsset>>>,
    failure: Arc<Mutex<Option<AssetStoreError>>>,
}

impl RecordingAssetStore {
    /// Make every subsequent upload fail with `error`.
    pub(crate) fn fail_uploads_with(&self, error: AssetStoreError) {
        *self.failure.lock().expect("failure lock") = Some(error);
    }

    pub(crate) fn uploads(&self) -> Vec<StoredAsset> {
        self.uploads.lock().expect("uploads lock").clone()
    }

    pub(crate) fn discards(&self) -> Vec<StoredAsset> {
        self.discards.lock().expect("discards lock").clone()
    }
}

#[async_trait]
impl AssetStore for RecordingAssetStore {
    async fn upload(&self, _image: &FacialImage) -> Result<StoredAsset, AssetStoreError> {
        if let Some(error) = self.failure.lock().expect("failure lock").clone() {
            return Err(error);
        }
        let mut uploads = self.uploads.lock().expect("uploads lock");
        let n = uploads.len() + 1;
        let asset = StoredAsset {
            secure_url: format!("https://cdn/{n}.jpg"),
            public_id: format!("faces/{n}"),
        };
        uploads.push(asset.clone());
        Ok(asset)
    }

    async fn discard(&self, asset: &StoredAsset) -> Result<(), AssetStoreError> {
        self.discards
            .lock()
            .expect("discards lock")
            .push(asset.clone());
        Ok(())
    }
}

/// In-memory user table with a unique email constraint and serial ids.
#[derive(Clone, Default)]
pub(crate) struct InMemoryUserRepository {
    rows: Arc<Mutex<Vec<(UserId, NewUser)>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl InMemoryUserRepository {
    pub(crate) fn rows(&self) -> Vec<(UserId, NewUser)> {
        self.rows.lock().expect("rows lock").clone()
    }

    pub(crate) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookups lock").clone()
    }

    /// Insert a row directly, bypassing registration.
    pub(crate) fn seed(&self, email: &str, reference_image_url: &str) -> UserId {
        let mut rows = self.rows.lock().expect("rows lock");
        let id = next_id(&rows);
        rows.push((
            id,
            NewUser {
                email: email.to_owned(),
                first_name: "Seed".to_owned(),
                last_name: "User".to_owned(),
                reference_image_url: reference_image_url.to_owned(),
            },
        ));
        id
    }
}

fn next_id(rows: &[(UserId, NewUser)]) -> UserId {
    let count = i32::try_from(rows.len()).expect("row count fits in i32");
    UserId::new(count + 1)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserId, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        if rows.iter().any(|(_, row)| row.email == user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.clone()));
        }
        let id = next_id(&rows);
        rows.push((id, user.clone()));
        Ok(id)
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegisteredFace>, UserPersistenceError> {
        self.lookups
            .lock()
            .expect("lookups lock")
            .push(email.to_owned());
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows
            .iter()
            .find(|(_, row)| row.email == email)
            .map(|(id, row)| RegisteredFace {
                user_id: *id,
                reference_image_url: row.reference_image_url.clone(),
            }))
    }
}
