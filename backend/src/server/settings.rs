//! Process settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_POOL_SIZE;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8002;

/// Fallback variable consulted for the database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Listener and storage settings.
///
/// Without a database URL the service runs on in-memory storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub database_pool_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address to bind, defaulting to `127.0.0.1:8002`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Pool size, defaulting to [`DEFAULT_POOL_SIZE`].
    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }
}
