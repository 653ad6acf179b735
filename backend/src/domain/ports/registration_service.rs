//! Driving port for the registration use-case.
//!
//! Inbound adapters call this port with an already validated request and
//! render whatever [`Error`] comes back.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationReceipt, RegistrationRequest, UserId};

/// Domain use-case port for registering a face.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register the person described by `request`.
    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationReceipt, Error>;
}

/// Fixture service that accepts every registration without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationService;

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(&self, _request: &RegistrationRequest) -> Result<RegistrationReceipt, Error> {
        Ok(RegistrationReceipt {
            user_id: UserId::new(1),
            reference_image_url: "https://assets.invalid/faces/fixture.jpg".to_owned(),
        })
    }
}
