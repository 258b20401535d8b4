//! Registration API handler.
//!
//! ```text
//! POST /api/register {"name":"Ana López","email":"ana@example.com","password":"Abcdef1#"}
//! ```
//!
//! The precondition check here is presence-only and intentionally shallower
//! than the client's field validation: format rules are a usability concern,
//! not a security invariant, and the server never re-derives them.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::RegistrationPersistenceError;
use crate::domain::{Error, RegisteredUser, RegistrationDetails};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, messages};

/// Registration request body for `POST /api/register`.
///
/// Missing fields default to empty strings so the presence check can answer
/// with the fixed required-fields message instead of a deserialisation error.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    /// Full name of the registrant.
    #[serde(default)]
    pub name: String,
    /// Email address; unique across all records.
    #[serde(default)]
    pub email: String,
    /// Plaintext password, hashed inside the data store.
    #[serde(default)]
    pub password: String,
}

/// Success body for `POST /api/register`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    /// Always `true` on the success path.
    pub ok: bool,
    /// The created record; never includes the password hash.
    pub user: RegisteredUser,
}

fn map_persistence_error(error: RegistrationPersistenceError) -> Error {
    match error {
        RegistrationPersistenceError::DuplicateEmail { .. } => {
            Error::conflict(messages::EMAIL_TAKEN)
        }
        RegistrationPersistenceError::Connection { message }
        | RegistrationPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Register a new user.
///
/// Persists exactly one record per successful call. A duplicate email is
/// reported as `409` with a dedicated message; every other persistence
/// failure collapses into the generic `500` body after being logged.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Unexpected error")
    ),
    tags = ["registration"],
    operation_id = "register"
)]
#[post("/api/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        name,
        email,
        password,
    } = payload.into_inner();

    let details = RegistrationDetails::try_from_parts(&name, &email, &password)
        .map_err(|_| Error::invalid_request(messages::REQUIRED_FIELDS))?;

    let user = state
        .registration
        .create_user(&details)
        .await
        .map_err(map_persistence_error)?;

    Ok(HttpResponse::Created().json(RegisterResponse { ok: true, user }))
}
