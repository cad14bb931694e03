//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId, UserProfile};

/// Domain use-case port for creating, changing, and removing users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Change only the supplied fields.
    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Replace every mutable field.
    async fn replace_user(&self, id: UserId, profile: UserProfile) -> Result<User, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
