//! Diesel row structs internal to the persistence adapter.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::RegisteredUser;

use super::schema::users;

/// Columns read back from a registration insert.
///
/// Deliberately excludes `password_hash`: the hash is written by the insert
/// expression and never leaves the database.
#[derive(Debug, Queryable)]
pub(super) struct CreatedUserRow {
    pub(super) id: Uuid,
    pub(super) full_name: String,
    pub(super) email: String,
    pub(super) created_at: DateTime<Utc>,
}

/// Returning clause matching [`CreatedUserRow`].
pub(super) type CreatedUserColumns = (
    users::id,
    users::full_name,
    users::email,
    users::created_at,
);

/// The returning clause value for registration inserts.
pub(super) const CREATED_USER_COLUMNS: CreatedUserColumns =
    (users::id, users::full_name, users::email, users::created_at);

impl From<CreatedUserRow> for RegisteredUser {
    fn from(row: CreatedUserRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}
