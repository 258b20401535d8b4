//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API,
//! registering the registration and health paths plus their schemas. The
//! document is consumed by external tooling; no UI is served.

use utoipa::OpenApi;

/// OpenAPI document for the registration API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration backend API",
        description = "User registration endpoint and operational health probe."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::registration::register,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        crate::inbound::http::registration::RegisterRequest,
        crate::inbound::http::registration::RegisterResponse,
        crate::inbound::http::health::HealthStatus,
        crate::domain::RegisteredUser,
    ))
)]
pub struct ApiDoc;
