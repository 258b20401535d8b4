//! Diesel-backed [`RegistrationRepository`] adapter.
//!
//! The insert delegates password hashing to the data store: pgcrypto's
//! `crypt(password, gen_salt('bf'))` computes a salted blowfish hash with a
//! fresh salt per record, so the plaintext never persists and the hash never
//! crosses back into the application. Email uniqueness is enforced atomically
//! by the table constraint; no application-level locking exists or is needed
//! for a single insert.

use async_trait::async_trait;
use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RegistrationPersistenceError, RegistrationRepository};
use crate::domain::{RegisteredUser, RegistrationDetails};

use super::models::{CREATED_USER_COLUMNS, CreatedUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

define_sql_function! {
    /// pgcrypto adaptive hash: `crypt(password, salt)`.
    fn crypt(password: Text, salt: Text) -> Text;
}

define_sql_function! {
    /// pgcrypto salt generator; `'bf'` selects the blowfish scheme.
    fn gen_salt(hash_type: Text) -> Text;
}

/// Blowfish salt scheme identifier understood by `gen_salt`.
const BLOWFISH: &str = "bf";

/// Diesel-backed registration repository over a shared [`DbPool`].
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    /// Create a new repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegistrationPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RegistrationPersistenceError::connection(message)
        }
    }
}

fn map_insert_error(error: diesel::result::Error) -> RegistrationPersistenceError {
    match &error {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RegistrationPersistenceError::duplicate_email(info.message())
        }
        _ => {
            let message = error.to_string();
            debug!(%message, "registration insert failed");
            RegistrationPersistenceError::query(message)
        }
    }
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn create_user(
        &self,
        details: &RegistrationDetails,
    ) -> Result<RegisteredUser, RegistrationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CreatedUserRow = diesel::insert_into(users::table)
            .values((
                users::full_name.eq(details.full_name()),
                users::email.eq(details.email()),
                users::password_hash.eq(crypt(details.password(), gen_salt(BLOWFISH))),
            ))
            .returning(CREATED_USER_COLUMNS)
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;

        Ok(row.into())
    }
}
