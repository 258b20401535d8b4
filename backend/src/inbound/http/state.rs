//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::RegistrationRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration persistence port.
    pub registration: Arc<dyn RegistrationRepository>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(registration: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration }
    }
}
