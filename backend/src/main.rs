//! Backend entry-point: wires configuration, the connection pool, and the
//! registration REST endpoints.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let database_url = settings
        .database_url
        .clone()
        .ok_or_else(|| std::io::Error::other("DATABASE_URL is not set"))?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;

    let config = ServerConfig::new(settings.bind_addr(), settings.allowed_origins(), pool);
    info!(addr = %config.bind_addr(), "starting registration server");
    create_server(config)?.await
}
