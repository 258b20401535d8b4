//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and the fixed `{ "ok": false, "message": ... }` envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or misses required fields.
    InvalidRequest,
    /// The request collides with existing state (duplicate email).
    Conflict,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error carrying a code and a user-safe message.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::conflict("already registered");
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace-only.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed; all call sites pass
    /// compile-time literals or already-validated text.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message surfaced to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Constructor and validation coverage for the domain error payload.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("missing"), ErrorCode::InvalidRequest)]
    #[case(Error::conflict("duplicate"), ErrorCode::Conflict)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn convenience_constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_messages_are_rejected(#[case] message: &str) {
        let result = Error::try_new(ErrorCode::InternalError, message);
        assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
    }

    #[test]
    fn display_renders_the_message() {
        let error = Error::conflict("email taken");
        assert_eq!(error.to_string(), "email taken");
    }
}
