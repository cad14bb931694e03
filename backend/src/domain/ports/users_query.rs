//! Driving port for user-facing reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user-visible data
//! without importing outbound persistence concerns.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, ServiceStatus, User, UserId};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return one user, or a `not_found` error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Return one page of the user directory.
    async fn list_users(&self, request: PageRequest) -> Result<Page<User>, Error>;

    /// Report whether storage is reachable. Never fails.
    async fn status(&self) -> ServiceStatus;
}
