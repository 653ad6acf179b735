//! DTOs for decoding Cloudinary upload API responses.

use serde::Deserialize;

use crate::domain::ports::StoredAsset;

#[derive(Debug, Deserialize)]
pub(super) struct UploadResponseDto {
    secure_url: String,
    public_id: String,
}

impl From<UploadResponseDto> for StoredAsset {
    fn from(value: UploadResponseDto) -> Self {
        Self {
            secure_url: value.secure_url,
            public_id: value.public_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DestroyResponseDto {
    pub(super) result: String,
}

impl DestroyResponseDto {
    /// An asset that is already gone counts as discarded.
    pub(super) fn is_discarded(&self) -> bool {
        matches!(self.result.as_str(), "ok" | "not found")
    }
}
