//! Registration backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds transport-agnostic
//! types and ports, [`inbound`] the HTTP adapters, [`outbound`] the
//! PostgreSQL persistence adapters, and [`settings`] the environment-driven
//! configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
