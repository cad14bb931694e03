//! HTTP server configuration object.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::outbound::memory::InMemoryUserRepository;
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Builder-style configuration for creating the HTTP server.
///
/// Storage defaults to an empty in-memory repository; attach a pool to
/// serve from PostgreSQL instead.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) listener: Option<TcpListener>,
    pub(crate) repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Configure a server bound to `bind_addr` with in-memory storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            listener: None,
            repository: Arc::new(InMemoryUserRepository::new()),
        }
    }

    /// Serve from PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(self, pool: DbPool) -> Self {
        self.with_repository(Arc::new(DieselUserRepository::new(pool)))
    }

    /// Serve from an arbitrary repository.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = repository;
        self
    }

    /// Serve on an already-bound listener instead of binding `bind_addr`.
    ///
    /// Tests bind port 0 and read the assigned port from the listener.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Socket address the server binds when no listener is supplied.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Storage shared by every worker, e.g. for seeding before start.
    #[must_use]
    pub fn repository(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.repository)
    }
}
