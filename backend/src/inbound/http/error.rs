//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn failures into the fixed `{ "ok": false, "message": ... }`
//! envelope with consistent status codes. Internal error detail is logged and
//! replaced with the generic user-safe message before it reaches the wire.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::messages;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_safe_message(err: &Error) -> &str {
    if matches!(err.code(), ErrorCode::InternalError) {
        messages::UNEXPECTED
    } else {
        err.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self.message(), "request failed with internal error");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "ok": false,
            "message": user_safe_message(self),
        }))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Status mapping and redaction coverage for the HTTP error envelope.
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    async fn envelope(err: &Error) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("JSON body");
        (status, value)
    }

    #[rstest]
    #[case(Error::invalid_request(messages::REQUIRED_FIELDS), StatusCode::BAD_REQUEST)]
    #[case(Error::conflict(messages::EMAIL_TAKEN), StatusCode::CONFLICT)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn codes_map_to_fixed_statuses(#[case] err: Error, #[case] expected: StatusCode) {
        let (status, body) = envelope(&err).await;
        assert_eq!(status, expected);
        assert_eq!(body.get("ok"), Some(&Value::Bool(false)));
    }

    #[actix_web::test]
    async fn internal_detail_is_redacted() {
        let err = Error::internal("connection refused to db-primary:5432");
        let (_, body) = envelope(&err).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some(messages::UNEXPECTED)
        );
    }

    #[actix_web::test]
    async fn client_facing_messages_pass_through() {
        let err = Error::conflict(messages::EMAIL_TAKEN);
        let (_, body) = envelope(&err).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some(messages::EMAIL_TAKEN)
        );
    }
}
