//! User records as the gateway sees them.
//!
//! A user row is written once at registration and only read afterwards; the
//! gateway never updates or deletes it. Email uniqueness is owned by the
//! store's constraint, not by a pre-insert lookup.

use std::fmt;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap an identifier returned by the store.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Insert shape for a newly registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Public URL of the uploaded reference image.
    pub reference_image_url: String,
}

/// Lookup result used by verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFace {
    pub user_id: UserId,
    pub reference_image_url: String,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub user_id: UserId,
    pub reference_image_url: String,
}
