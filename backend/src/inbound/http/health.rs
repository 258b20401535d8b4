//! Health endpoint: a static OK status with no side effects.
//! Documented in OpenAPI via Utoipa.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Health probe response body.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Always the literal `"ok"`.
    #[schema(example = "ok")]
    pub status: &'static str,
}

/// Operational check. Returns a static OK payload; it does not touch the
/// data store or any other dependency.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    )
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthStatus> {
    web::Json(HealthStatus { status: "ok" })
}
