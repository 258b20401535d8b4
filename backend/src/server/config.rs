//! HTTP server configuration object.

use std::net::SocketAddr;

use backend::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, allowed_origins: Vec<String>, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            allowed_origins,
            db_pool,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
