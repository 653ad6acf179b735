//! Asset store outbound adapter.
//!
//! A thin HTTP implementation of the `AssetStore` port against the Cloudinary
//! signed upload API.

mod cloudinary;
mod credentials;
mod dto;

pub use cloudinary::{CloudinaryAssetStore, DEFAULT_CLOUDINARY_API_BASE};
pub use credentials::{CloudinaryConfigError, CloudinaryCredentials};
