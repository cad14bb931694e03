//! Port abstraction for user persistence adapters and their errors.
//!
//! Adapters own their concurrency: the in-memory adapter guards its state
//! with a mutex, the Diesel adapter relies on the connection pool and
//! single-statement atomicity.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the requested identifier is already stored.
        Duplicate { id: i64 } => "user {id} already exists",
    }
}

/// Driven port for user storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch one page of users in storage order.
    async fn list_page(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError>;

    /// Store a new user, assigning an identifier when none was supplied.
    ///
    /// Fails with [`UserPersistenceError::Duplicate`] when the supplied
    /// identifier is taken.
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Apply `changes` to the stored user, returning the result.
    ///
    /// Returns `Ok(None)` when no user has that identifier.
    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user, returning whether one was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Remove every user, returning how many were removed.
    async fn clear(&self) -> Result<u64, UserPersistenceError>;

    /// Check that the backing store answers.
    async fn ping(&self) -> Result<(), UserPersistenceError>;
}
