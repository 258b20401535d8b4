//! Port abstraction for registration persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{RegisteredUser, RegistrationDetails};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by registration repository adapters.
    pub enum RegistrationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "registration repository connection failed: {message}",
        /// Insert failed during execution.
        Query { message: String } => "registration repository query failed: {message}",
        /// The unique constraint on the email column rejected the insert.
        DuplicateEmail { message: String } => "email already registered: {message}",
    }
}

/// Persists exactly one record per successful registration.
///
/// The adapter owns password hashing: implementations must derive a salted
/// hash inside the data store and never persist the plaintext.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a new user and return the created record.
    async fn create_user(
        &self,
        details: &RegistrationDetails,
    ) -> Result<RegisteredUser, RegistrationPersistenceError>;
}
