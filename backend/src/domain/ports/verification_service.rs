//! Driving port for the verification use-case.

use async_trait::async_trait;

use crate::domain::{ComparisonResult, Error, VerificationRequest};

/// Domain use-case port for verifying a face against a registered user.
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Compare the submitted image with the user's reference image.
    async fn verify(&self, request: &VerificationRequest) -> Result<ComparisonResult, Error>;
}

/// Fixture service that reports every verification as a non-match.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVerificationService;

#[async_trait]
impl VerificationService for FixtureVerificationService {
    async fn verify(&self, _request: &VerificationRequest) -> Result<ComparisonResult, Error> {
        Ok(ComparisonResult {
            is_match: false,
            distance: 1.0,
            threshold: 0.4,
            elapsed: 0.0,
        })
    }
}
