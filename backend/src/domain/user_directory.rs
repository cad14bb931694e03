//! User directory service.
//!
//! Implements the driving ports on top of a [`UserRepository`] and turns
//! persistence failures into transport-agnostic [`Error`]s.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{
    Error, NewUser, ServiceStatus, User, UserChanges, UserId, UserProfile,
};

/// Message returned whenever a user id does not resolve.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Message returned when a create reuses a stored id.
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// CRUD and listing use-cases over a user repository.
#[derive(Clone)]
pub struct UserDirectory {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create a directory backed by `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user storage unavailable");
            Error::service_unavailable("User storage is unavailable")
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user storage query failed");
            Error::internal(format!("user storage query failed: {message}"))
        }
        UserPersistenceError::Duplicate { id } => {
            debug!(id, "duplicate user id rejected");
            Error::already_exists(USER_EXISTS_MESSAGE).with_details(json!({ "id": id }))
        }
    }
}

fn not_found() -> Error {
    Error::not_found(USER_NOT_FOUND_MESSAGE)
}

#[async_trait]
impl UsersQuery for UserDirectory {
    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }

    async fn list_users(&self, request: PageRequest) -> Result<Page<User>, Error> {
        self.repository
            .list_page(request)
            .await
            .map_err(map_persistence_error)
    }

    async fn status(&self) -> ServiceStatus {
        let database = match self.repository.ping().await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "user storage ping failed");
                false
            }
        };
        ServiceStatus { database }
    }
}

#[async_trait]
impl UsersCommand for UserDirectory {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.repository
            .insert(user)
            .await
            .map_err(map_persistence_error)
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        if changes.is_empty() {
            return self.get_user(id).await;
        }
        self.repository
            .update(id, changes)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(not_found)
    }

    async fn replace_user(&self, id: UserId, profile: UserProfile) -> Result<User, Error> {
        self.update_user(id, profile.into()).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if removed { Ok(()) } else { Err(not_found()) }
    }
}
