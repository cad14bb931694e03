//! In-process user storage.
//!
//! Used when no database URL is configured. Users are kept in insertion
//! order behind a mutex; the adapter value is owned by the server and shared
//! through `Arc<dyn UserRepository>`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

const FIRST_ID: i64 = 1;

#[derive(Debug)]
struct Store {
    users: Vec<User>,
    /// `None` once an id of `i64::MAX` has been handed out.
    next_id: Option<i64>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: Some(FIRST_ID),
        }
    }
}

impl Store {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }

    fn allocate(&mut self, requested: Option<UserId>) -> Result<UserId, UserPersistenceError> {
        let id = match requested {
            Some(id) if self.position(id).is_some() => {
                return Err(UserPersistenceError::duplicate(id.get()));
            }
            Some(id) => id,
            None => {
                let next = self
                    .next_id
                    .ok_or_else(|| UserPersistenceError::query("identifier space exhausted"))?;
                let id = UserId::new(next)
                    .map_err(|err| UserPersistenceError::query(err.to_string()))?;
                if self.position(id).is_some() {
                    return Err(UserPersistenceError::query("identifier space exhausted"));
                }
                id
            }
        };
        self.next_id = self
            .next_id
            .zip(id.get().checked_add(1))
            .map(|(current, after)| current.max(after));
        Ok(id)
    }
}

/// Mutex-guarded user repository kept in memory.
///
/// ## Invariants
/// - Identifiers are unique.
/// - Generated identifiers are greater than every stored identifier.
/// - Listing order is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panic while holding the lock cannot leave a half-applied write:
        // every mutation is a single Vec operation.
        self.store.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock();
        Ok(store.position(id).map(|index| store.users[index].clone()))
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError> {
        Ok(Page::from_slice(&self.lock().users, request))
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.lock();
        let id = store.allocate(user.id)?;
        let stored = User::new(id, user.profile);
        store.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.lock();
        let Some(index) = store.position(id) else {
            return Ok(None);
        };
        let updated = store.users[index].with_changes(changes);
        store.users[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut store = self.lock();
        Ok(store
            .position(id)
            .map(|index| store.users.remove(index))
            .is_some())
    }

    async fn clear(&self) -> Result<u64, UserPersistenceError> {
        let mut store = self.lock();
        let removed = std::mem::take(&mut *store).users.len();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn ping(&self) -> Result<(), UserPersistenceError> {
        Ok(())
    }
}
