//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::UserDirectory;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use-cases.
    pub query: Arc<dyn UsersQuery>,
    /// Write-side use-cases.
    pub command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(query: Arc<dyn UsersQuery>, command: Arc<dyn UsersCommand>) -> Self {
        Self { query, command }
    }
}

impl From<UserDirectory> for HttpState {
    fn from(directory: UserDirectory) -> Self {
        let directory = Arc::new(directory);
        Self::new(directory.clone(), directory)
    }
}
