//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{App, HttpServer, web};

use backend::inbound::http::health::health;
use backend::inbound::http::registration::register;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselRegistrationRepository;

/// Permissive cross-origin policy restricted to the configured origins.
fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

/// Create and bind the HTTP server from the supplied configuration.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the listen address cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let repository = Arc::new(DieselRegistrationRepository::new(config.db_pool.clone()));
    let http_state = web::Data::new(HttpState::new(repository));
    let allowed_origins = config.allowed_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(build_cors(&allowed_origins))
            .service(register)
            .service(health)
    })
    .bind(config.bind_addr)?;

    Ok(server.run())
}
