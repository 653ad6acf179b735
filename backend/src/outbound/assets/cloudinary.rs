//! Reqwest-backed Cloudinary asset store.
//!
//! Uploads and deletions are signed requests against
//! `{api_base}/v1_1/{cloud_name}/image/{upload,destroy}`. The signature is
//! the hex SHA-256 of the alphabetically sorted `key=value` parameters joined
//! with `&`, followed directly by the API secret. `file`, `api_key` and the
//! signature fields themselves are not signed.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use super::credentials::{CloudinaryConfigError, CloudinaryCredentials};
use super::dto::{DestroyResponseDto, UploadResponseDto};
use crate::domain::FacialImage;
use crate::domain::ports::{AssetStore, AssetStoreError, StoredAsset};
use crate::outbound::http_support::{as_directory, body_preview};

/// Public Cloudinary API host.
pub const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";

const SIGNATURE_ALGORITHM: &str = "sha256";
const BARE_IMAGE_PREFIX: &str = "data:image/jpeg;base64,";

/// Asset store adapter for the Cloudinary upload API.
pub struct CloudinaryAssetStore {
    client: Client,
    upload_endpoint: Url,
    destroy_endpoint: Url,
    credentials: CloudinaryCredentials,
    folder: Option<String>,
    clock: Arc<dyn Clock>,
}

impl CloudinaryAssetStore {
    /// Build an adapter with an explicit request timeout.
    ///
    /// `clock` supplies the request timestamp Cloudinary uses to reject stale
    /// signatures.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoints cannot be derived from `api_base`
    /// or the reqwest client cannot be constructed.
    pub fn new(
        credentials: CloudinaryCredentials,
        api_base: &Url,
        folder: Option<String>,
        timeout: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CloudinaryConfigError> {
        let client = Client::builder().timeout(timeout).build()?;
        let image_base =
            as_directory(api_base).join(&format!("v1_1/{}/image/", credentials.cloud_name()))?;
        Ok(Self {
            client,
            upload_endpoint: image_base.join("upload")?,
            destroy_endpoint: image_base.join("destroy")?,
            credentials,
            folder: folder.filter(|value| !value.trim().is_empty()),
            clock,
        })
    }

    fn timestamp(&self) -> String {
        self.clock.utc().timestamp().to_string()
    }

    /// Sign `params` and append the credential fields to form a request body.
    fn signed_form<'a>(
        &'a self,
        mut params: Vec<(&'a str, Cow<'a, str>)>,
    ) -> Vec<(&'a str, Cow<'a, str>)> {
        let signature = sign(&params, self.credentials.api_secret());
        params.push(("api_key", Cow::Borrowed(self.credentials.api_key())));
        params.push(("signature", Cow::Owned(signature)));
        params.push(("signature_algorithm", Cow::Borrowed(SIGNATURE_ALGORITHM)));
        params
    }

    async fn post_form<T>(
        &self,
        endpoint: &Url,
        form: &[(&str, Cow<'_, str>)],
    ) -> Result<T, AssetStoreError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        serde_json::from_slice(body.as_ref()).map_err(|error| {
            AssetStoreError::invalid_response(format!(
                "{error} (body: {preview})",
                preview = body_preview(body.as_ref())
            ))
        })
    }
}

#[async_trait]
impl AssetStore for CloudinaryAssetStore {
    async fn upload(&self, image: &FacialImage) -> Result<StoredAsset, AssetStoreError> {
        let mut params = vec![("timestamp", Cow::Owned(self.timestamp()))];
        if let Some(folder) = &self.folder {
            params.push(("folder", Cow::Borrowed(folder.as_str())));
        }
        let mut form = self.signed_form(params);
        form.push(("file", upload_source(image)));

        let decoded: UploadResponseDto = self.post_form(&self.upload_endpoint, &form).await?;
        Ok(decoded.into())
    }

    async fn discard(&self, asset: &StoredAsset) -> Result<(), AssetStoreError> {
        let params = vec![
            ("public_id", Cow::Borrowed(asset.public_id.as_str())),
            ("timestamp", Cow::Owned(self.timestamp())),
        ];
        let form = self.signed_form(params);

        let decoded: DestroyResponseDto = self.post_form(&self.destroy_endpoint, &form).await?;
        if decoded.is_discarded() {
            Ok(())
        } else {
            Err(AssetStoreError::invalid_response(format!(
                "unexpected destroy result: {}",
                decoded.result
            )))
        }
    }
}

/// Data URIs and remote URLs pass through; bare base64 gets a data URI
/// prefix so Cloudinary can recognise it as inline content.
fn upload_source(image: &FacialImage) -> Cow<'_, str> {
    let raw = image.as_str();
    if raw.starts_with("data:") || raw.starts_with("https://") || raw.starts_with("http://") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{BARE_IMAGE_PREFIX}{raw}"))
    }
}

fn sign(params: &[(&str, Cow<'_, str>)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
    sorted.sort_by(|left, right| left.0.cmp(right.0));
    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn map_transport_error(error: reqwest::Error) -> AssetStoreError {
    if error.is_timeout() {
        AssetStoreError::transport(format!("request timed out: {error}"))
    } else {
        AssetStoreError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AssetStoreError {
    AssetStoreError::rejected(status.as_u16(), body_preview(body))
}
