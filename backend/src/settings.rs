//! Server configuration loaded via OrthoConfig.
//!
//! Values come from the environment (`DATABASE_URL`, `PORT`, `CORS_ORIGIN`);
//! there is no logic beyond defaults and the comma-split of allowed origins.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Environment-driven settings for the registration server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct ServerSettings {
    /// PostgreSQL connection string. Required at startup.
    pub database_url: Option<String>,
    /// Listen port for the HTTP server.
    #[ortho_config(default = 4000)]
    pub port: u16,
    /// Comma-separated list of allowed CORS origins.
    pub cors_origin: Option<String>,
}

impl ServerSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Allowed CORS origins, falling back to the local development origin.
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origin
            .as_deref()
            .map_or_else(
                || vec![DEFAULT_ORIGIN.to_owned()],
                |raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(ToOwned::to_owned)
                        .collect()
                },
            )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings derivation; environment loading itself is
    //! OrthoConfig's concern.
    use super::*;
    use rstest::rstest;

    fn settings(cors_origin: Option<&str>) -> ServerSettings {
        ServerSettings {
            database_url: None,
            port: 4000,
            cors_origin: cors_origin.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn default_origin_is_used_when_unset() {
        assert_eq!(settings(None).allowed_origins(), vec![DEFAULT_ORIGIN]);
    }

    #[rstest]
    #[case("https://a.example", vec!["https://a.example"])]
    #[case("https://a.example, https://b.example", vec!["https://a.example", "https://b.example"])]
    #[case("https://a.example,,", vec!["https://a.example"])]
    fn origins_split_on_commas(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(settings(Some(raw)).allowed_origins(), expected);
    }

    #[test]
    fn bind_addr_uses_the_configured_port() {
        assert_eq!(settings(None).bind_addr().port(), 4000);
    }
}
