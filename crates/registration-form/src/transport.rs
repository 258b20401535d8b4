//! Registration API port and its reqwest-backed implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::messages;

/// Request timeout; a hung request must not leave the form stuck forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Registration request body, built fresh per submit attempt from a fully
/// valid form. Name and email arrive trimmed; the password is raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    /// Trimmed full name.
    pub name: String,
    /// Trimmed email address.
    pub email: String,
    /// Raw password, exactly as typed.
    pub password: String,
}

/// The created record as returned by the server. Never contains the hash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Full name as registered.
    pub full_name: String,
    /// Registered email address.
    pub email: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Failures reported by [`RegistrationApi::register`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationCallError {
    /// The server answered with a non-success status.
    #[error("registration rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// Server-provided message, or the generic fallback.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("registration transport failed: {message}")]
    Transport {
        /// Underlying transport failure text.
        message: String,
    },
}

/// Port for the registration HTTP exchange.
///
/// The submitter depends on this trait so tests can substitute a recording
/// stub; [`HttpRegistrationApi`] is the production implementation.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit one registration payload and await the outcome.
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisteredUser, RegistrationCallError>;
}

#[derive(Debug, Deserialize)]
struct SuccessBody {
    user: RegisteredUser,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// reqwest-backed [`RegistrationApi`] for `POST {base}/api/register`.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRegistrationApi {
    /// Create a client for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] when the underlying client cannot be
    /// constructed (for example, TLS backend initialisation failure).
    pub fn new(base_url: Url) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self) -> Result<Url, RegistrationCallError> {
        self.base_url
            .join("api/register")
            .map_err(|err| RegistrationCallError::Transport {
                message: err.to_string(),
            })
    }
}

fn transport_error(err: &reqwest::Error) -> RegistrationCallError {
    RegistrationCallError::Transport {
        message: err.to_string(),
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegisteredUser, RegistrationCallError> {
        let response = self
            .client
            .post(self.endpoint()?)
            .json(payload)
            .send()
            .await
            .map_err(|err| transport_error(&err))?;

        let status = response.status();
        if status.is_success() {
            let body: SuccessBody = response
                .json()
                .await
                .map_err(|err| transport_error(&err))?;
            return Ok(body.user);
        }

        // Non-success bodies carry `{ "ok": false, "message": ... }`; fall
        // back to the generic text when the body is absent or malformed.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => messages::TRANSPORT_FALLBACK.to_owned(),
        };

        Err(RegistrationCallError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
