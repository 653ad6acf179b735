//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, RegisteredFace, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The email is already taken by another user row.
        DuplicateEmail { email: String } => "user with email {email} already exists",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user row and return its identifier.
    async fn create(&self, user: &NewUser) -> Result<UserId, UserPersistenceError>;

    /// Fetch the reference image registered under `email`.
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RegisteredFace>, UserPersistenceError>;
}

/// Fixture repository that accepts every insert and knows no users.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, _user: &NewUser) -> Result<UserId, UserPersistenceError> {
        Ok(UserId::new(1))
    }

    async fn find_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<RegisteredFace>, UserPersistenceError> {
        Ok(None)
    }
}
