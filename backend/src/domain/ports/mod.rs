//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`FaceRecognition`, `AssetStore`, `UserRepository`) are
//! implemented by outbound adapters; driving ports (`RegistrationService`,
//! `VerificationService`) are implemented by the orchestrators and called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod asset_store;
mod face_recognition;
mod registration_service;
mod user_repository;
mod verification_service;

#[cfg(test)]
pub use asset_store::MockAssetStore;
pub use asset_store::{AssetStore, AssetStoreError, FixtureAssetStore, StoredAsset};
#[cfg(test)]
pub use face_recognition::MockFaceRecognition;
pub use face_recognition::{FaceRecognition, FixtureFaceRecognition, RecognitionError};
pub use registration_service::{FixtureRegistrationService, RegistrationService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
pub use verification_service::{FixtureVerificationService, VerificationService};
