//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` carries a unique constraint; violations surface as duplicate
    /// registrations. `password_hash` is written exclusively through
    /// pgcrypto's `crypt(..., gen_salt('bf'))` and never read back out.
    users (id) {
        /// Primary key, generated by the database (`gen_random_uuid()`).
        id -> Uuid,
        /// Full name as submitted at registration.
        full_name -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Salted blowfish hash of the password.
        password_hash -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
