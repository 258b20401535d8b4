//! Registration data model.
//!
//! [`RegistrationDetails`] performs the server-side precondition check:
//! presence of all three fields. Format rules (name pattern, email shape,
//! password policy) are deliberately left to the client; the server never
//! re-derives them, matching the documented validation asymmetry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`RegistrationDetails::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// The name field was missing or empty.
    EmptyName,
    /// The email field was missing or empty.
    EmptyEmail,
    /// The password field was missing or empty.
    EmptyPassword,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Presence-validated registration input.
///
/// ## Invariants
/// - All three fields are non-empty strings. No format validation happens
///   here; this check is intentionally shallower than the client's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDetails {
    full_name: String,
    email: String,
    password: String,
}

impl RegistrationDetails {
    /// Validate presence of all fields and construct the details.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        if name.is_empty() {
            return Err(RegistrationValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(RegistrationValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        Ok(Self {
            full_name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The registrant's full name, as submitted.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The registrant's email address, as submitted.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The plaintext password. Only the persistence adapter may read this; it
    /// is passed to the data store's hashing primitive and never stored.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// A persisted user record as returned to clients.
///
/// Serialises with snake_case keys (`full_name`, `created_at`) to match the
/// wire contract. The password hash never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegisteredUser {
    /// Primary key assigned by the data store.
    pub id: Uuid,
    /// Full name, exactly as registered.
    pub full_name: String,
    /// Unique email address.
    pub email: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Presence-check coverage for registration details.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "ana@example.com", "Abcdef1#", RegistrationValidationError::EmptyName)]
    #[case("Ana López", "", "Abcdef1#", RegistrationValidationError::EmptyEmail)]
    #[case("Ana López", "ana@example.com", "", RegistrationValidationError::EmptyPassword)]
    fn missing_fields_are_rejected(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: RegistrationValidationError,
    ) {
        let result = RegistrationDetails::try_from_parts(name, email, password);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn shallow_check_accepts_unformatted_input() {
        // Format enforcement belongs to the client; the server only checks
        // presence, so even a malformed email passes this constructor.
        let details = RegistrationDetails::try_from_parts("x", "not-an-email", "short")
            .expect("presence-only validation");
        assert_eq!(details.email(), "not-an-email");
    }

    #[test]
    fn fields_round_trip_unchanged() {
        let details = RegistrationDetails::try_from_parts("Ana López", "ana@example.com", "Abcdef1#")
            .expect("valid details");
        assert_eq!(details.full_name(), "Ana López");
        assert_eq!(details.password(), "Abcdef1#");
    }
}
