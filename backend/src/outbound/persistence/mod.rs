//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain ports backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling. Row structs and the table
//! definition are internal details, never exposed to the domain layer, and
//! all database errors map to domain persistence error types.

mod diesel_registration_repository;
mod models;
mod pool;
mod schema;

pub use diesel_registration_repository::DieselRegistrationRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
