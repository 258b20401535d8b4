//! Domain primitives for the registration flow.
//!
//! Purpose: define the strongly typed registration entities shared by the
//! HTTP and persistence layers. Types stay immutable and transport-agnostic;
//! inbound adapters translate them to wire envelopes, outbound adapters to
//! database rows.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — adapter-facing failure payload.
//! - [`RegistrationDetails`] — presence-validated registration input.
//! - [`RegisteredUser`] — the persisted record returned to clients.

pub mod error;
pub mod ports;
pub mod registration;

pub use self::error::{Error, ErrorCode};
pub use self::registration::{RegisteredUser, RegistrationDetails, RegistrationValidationError};
