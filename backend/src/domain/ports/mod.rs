//! Domain ports for the hexagonal boundary.
//!
//! Adapters in `outbound/` implement these traits; HTTP handlers depend on
//! them through [`crate::inbound::http::state::HttpState`].

mod macros;
pub(crate) use macros::define_port_error;

mod registration_repository;

pub use registration_repository::{RegistrationPersistenceError, RegistrationRepository};
