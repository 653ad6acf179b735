//! Driven port for the object store holding reference images.
//!
//! Uploads are not idempotent: uploading the same image twice produces two
//! assets. `discard` exists so a registration that fails after uploading can
//! remove the orphan.

use async_trait::async_trait;

use crate::domain::FacialImage;

use super::define_port_error;

/// Handle to an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Publicly retrievable HTTPS URL.
    pub secure_url: String,
    /// Provider identifier used to delete the asset.
    pub public_id: String,
}

define_port_error! {
    /// Failures raised by asset store adapters.
    pub enum AssetStoreError {
        /// The store could not be reached or did not answer in time.
        Transport { message: String } => "asset store transport failed: {message}",
        /// The store refused the request.
        Rejected { status: u16, body: String } =>
            "asset store rejected request (status {status}): {body}",
        /// The store answered successfully but the body could not be decoded.
        InvalidResponse { message: String } => "asset store response invalid: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload `image` and return where it can be fetched from.
    async fn upload(&self, image: &FacialImage) -> Result<StoredAsset, AssetStoreError>;

    /// Delete a previously uploaded asset.
    async fn discard(&self, asset: &StoredAsset) -> Result<(), AssetStoreError>;
}

/// Fixture adapter returning a fixed asset without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAssetStore;

#[async_trait]
impl AssetStore for FixtureAssetStore {
    async fn upload(&self, _image: &FacialImage) -> Result<StoredAsset, AssetStoreError> {
        Ok(StoredAsset {
            secure_url: "https://assets.invalid/faces/fixture.jpg".to_owned(),
            public_id: "faces/fixture".to_owned(),
        })
    }

    async fn discard(&self, _asset: &StoredAsset) -> Result<(), AssetStoreError> {
        Ok(())
    }
}
