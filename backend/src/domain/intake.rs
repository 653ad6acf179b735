//! Validated request types for registration and verification.
//!
//! The constructors are the only way to build these requests, so an
//! orchestrator never sees a request with an empty field. Validation is pure:
//! nothing is called, logged or stored while it runs.

use std::fmt;

use super::Error;

/// Message returned for every incomplete request; it names no field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Rejection raised while building a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// At least one required field was absent or empty.
    #[error("{MISSING_FIELDS_MESSAGE}")]
    MissingFields,
}

impl From<IntakeError> for Error {
    fn from(value: IntakeError) -> Self {
        match value {
            IntakeError::MissingFields => Self::missing_fields(MISSING_FIELDS_MESSAGE),
        }
    }
}

/// Encoded facial image (base64 or data URI), passed through untouched.
///
/// `Debug` prints only the length so request logging never dumps image data.
#[derive(Clone, PartialEq, Eq)]
pub struct FacialImage(String);

impl FacialImage {
    /// Validate a standalone encoded image.
    ///
    /// # Errors
    /// Returns [`IntakeError::MissingFields`] when the image is empty.
    pub fn try_new(value: impl Into<String>) -> Result<Self, IntakeError> {
        required(value.into()).map(Self)
    }

    /// Borrow the encoded image.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length of the encoded image in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated image; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for FacialImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FacialImage(<{} bytes>)", self.0.len())
    }
}

/// Registration request with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    email: String,
    first_name: String,
    last_name: String,
    facial_image: FacialImage,
}

impl RegistrationRequest {
    /// Validate the raw parts of a registration.
    ///
    /// Field values are kept as submitted; only the empty string is missing.
    ///
    /// # Errors
    /// Returns [`IntakeError::MissingFields`] when any part is empty.
    ///
    /// # Examples
    /// ```
    /// use facegate::domain::{IntakeError, RegistrationRequest};
    ///
    /// let request = RegistrationRequest::try_from_parts("a@x.io", "Ada", "L", "b64");
    /// assert!(request.is_ok());
    /// let rejected = RegistrationRequest::try_from_parts("a@x.io", "", "L", "b64");
    /// assert_eq!(rejected, Err(IntakeError::MissingFields));
    /// ```
    pub fn try_from_parts(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        facial_image: impl Into<String>,
    ) -> Result<Self, IntakeError> {
        let email = required(email.into())?;
        let first_name = required(first_name.into())?;
        let last_name = required(last_name.into())?;
        let facial_image = FacialImage::try_new(facial_image)?;
        Ok(Self {
            email,
            first_name,
            last_name,
            facial_image,
        })
    }

    /// Submitted email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submitted first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Submitted last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Submitted facial image.
    #[must_use]
    pub fn facial_image(&self) -> &FacialImage {
        &self.facial_image
    }
}

/// Verification request with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    email: String,
    facial_image: FacialImage,
}

impl VerificationRequest {
    /// Validate the raw parts of a verification.
    ///
    /// # Errors
    /// Returns [`IntakeError::MissingFields`] when any part is empty.
    pub fn try_from_parts(
        email: impl Into<String>,
        facial_image: impl Into<String>,
    ) -> Result<Self, IntakeError> {
        let email = required(email.into())?;
        let facial_image = FacialImage::try_new(facial_image)?;
        Ok(Self {
            email,
            facial_image,
        })
    }

    /// Submitted email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submitted facial image.
    #[must_use]
    pub fn facial_image(&self) -> &FacialImage {
        &self.facial_image
    }
}

fn required(value: String) -> Result<String, IntakeError> {
    if value.is_empty() {
        Err(IntakeError::MissingFields)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("", "Ada", "Lovelace", "img")]
    #[case("ada@example.com", "", "Lovelace", "img")]
    #[case("ada@example.com", "Ada", "", "img")]
    #[case("ada@example.com", "Ada", "Lovelace", "")]
    #[case("", "", "", "")]
    fn registration_rejects_any_empty_field(
        #[case] email: &str,
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] image: &str,
    ) {
        let result = RegistrationRequest::try_from_parts(email, first_name, last_name, image);
        assert_eq!(result, Err(IntakeError::MissingFields));
    }

    #[rstest]
    #[case("", "img")]
    #[case("ada@example.com", "")]
    fn verification_rejects_any_empty_field(#[case] email: &str, #[case] image: &str) {
        let result = VerificationRequest::try_from_parts(email, image);
        assert_eq!(result, Err(IntakeError::MissingFields));
    }

    #[rstest]
    fn registration_keeps_values_verbatim() {
        let request =
            RegistrationRequest::try_from_parts(" ada@example.com", "Ada", "Lovelace", "aGk=")
                .expect("valid request");
        assert_eq!(request.email(), " ada@example.com");
        assert_eq!(request.facial_image().as_str(), "aGk=");
    }

    #[rstest]
    #[case(" ", "img")]
    #[case("ada@example.com", "\t")]
    fn whitespace_counts_as_present(#[case] email: &str, #[case] image: &str) {
        let request = VerificationRequest::try_from_parts(email, image).expect("present fields");
        assert_eq!(request.email(), email);
        assert_eq!(request.facial_image().as_str(), image);
    }

    #[rstest]
    fn missing_fields_maps_to_uniform_error() {
        let error: Error = IntakeError::MissingFields.into();
        assert_eq!(error.code(), ErrorCode::MissingFields);
        assert_eq!(error.message(), "All fields are required");
    }

    #[rstest]
    fn facial_image_debug_hides_content() {
        let request = VerificationRequest::try_from_parts("ada@example.com", "c2VjcmV0")
            .expect("valid request");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("c2VjcmV0"));
        assert!(rendered.contains("<8 bytes>"));
    }
}
