//! Tests for the verification orchestrator.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockFaceRecognition, MockUserRepository, RecognitionError, UserPersistenceError,
};
use crate::domain::{ErrorCode, UserId};

const REFERENCE_URL: &str = "https://res.cloudinary.com/demo/image/upload/faces/ada.jpg";

#[fixture]
fn request() -> VerificationRequest {
    VerificationRequest::try_from_parts("ada@example.com", "cHJvYmU=").expect("valid request")
}

fn registered() -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("ada@example.com"))
        .returning(|_| {
            Ok(Some(RegisteredFace {
                user_id: UserId::new(3),
                reference_image_url: REFERENCE_URL.to_owned(),
            }))
        });
    users
}

fn verdict() -> ComparisonResult {
    ComparisonResult {
        is_match: false,
        distance: 0.61,
        threshold: 0.4,
        elapsed: 1.27,
    }
}

#[rstest]
#[tokio::test]
async fn verify_relays_the_verdict_verbatim(request: VerificationRequest) {
    let mut recognition = MockFaceRecognition::new();
    recognition
        .expect_compare()
        .withf(|reference: &str, probe: &crate::domain::FacialImage| {
            reference == REFERENCE_URL && probe.as_str() == "cHJvYmU="
        })
        .times(1)
        .return_once(|_, _| Ok(verdict()));

    let orchestrator = VerificationOrchestrator::new(Arc::new(recognition), Arc::new(registered()));
    let result = orchestrator.verify(&request).await.expect("verification succeeds");

    assert_eq!(result, verdict());
}

#[rstest]
#[tokio::test]
async fn unknown_email_never_reaches_the_service(request: VerificationRequest) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(None));
    let mut recognition = MockFaceRecognition::new();
    recognition.expect_compare().times(0);

    let orchestrator = VerificationOrchestrator::new(Arc::new(recognition), Arc::new(users));
    let error = orchestrator.verify(&request).await.expect_err("unknown user");

    assert_eq!(error.code(), ErrorCode::UserUnknown);
    assert_eq!(error.message(), "User account doesn't exist");
}

#[rstest]
#[tokio::test]
async fn lookup_failure_is_a_repository_error(request: VerificationRequest) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::connection("pool timed out")));
    let mut recognition = MockFaceRecognition::new();
    recognition.expect_compare().times(0);

    let orchestrator = VerificationOrchestrator::new(Arc::new(recognition), Arc::new(users));
    let error = orchestrator.verify(&request).await.expect_err("lookup fails");

    assert_eq!(error.code(), ErrorCode::RepositoryError);
}

#[rstest]
#[tokio::test]
async fn remote_failure_keeps_status_in_message(request: VerificationRequest) {
    let mut recognition = MockFaceRecognition::new();
    recognition
        .expect_compare()
        .times(1)
        .return_once(|_, _| Err(RecognitionError::remote(500_u16, "model crashed")));

    let orchestrator = VerificationOrchestrator::new(Arc::new(recognition), Arc::new(registered()));
    let error = orchestrator.verify(&request).await.expect_err("compare fails");

    assert_eq!(error.code(), ErrorCode::RemoteServiceError);
    assert!(error.message().contains("status 500"));
    assert!(error.message().contains("model crashed"));
}

#[rstest]
#[tokio::test]
async fn repeated_verifications_are_not_cached(request: VerificationRequest) {
    let mut recognition = MockFaceRecognition::new();
    recognition
        .expect_compare()
        .times(2)
        .returning(|_, _| Ok(verdict()));

    let orchestrator = VerificationOrchestrator::new(Arc::new(recognition), Arc::new(registered()));
    let first = orchestrator.verify(&request).await.expect("first verification");
    let second = orchestrator.verify(&request).await.expect("second verification");

    assert_eq!(first, second);
}
