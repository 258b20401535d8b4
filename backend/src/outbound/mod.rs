//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations; they contain no business logic. The only infrastructure
//! here is PostgreSQL, under [`persistence`].

pub mod persistence;
