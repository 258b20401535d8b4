//! Connectivity smoke test: open one pooled connection, release it, report.
//!
//! Not part of the request path; run as `cargo run --bin check-db` against
//! the same environment as the server to confirm the data store is reachable.

use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::settings::ServerSettings;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    match check_connection().await {
        Ok(()) => {
            info!("database connection succeeded");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!(%message, "database connection failed");
            ExitCode::FAILURE
        }
    }
}

async fn check_connection() -> Result<(), String> {
    let settings = ServerSettings::load().map_err(|e| format!("failed to load settings: {e}"))?;
    let database_url = settings
        .database_url
        .ok_or_else(|| "DATABASE_URL is not set".to_owned())?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| e.to_string())?;

    // Checkout proves reachability; dropping the guard returns the connection.
    let _conn = pool.get().await.map_err(|e| e.to_string())?;
    Ok(())
}
