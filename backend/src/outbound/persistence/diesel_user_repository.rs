//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Listing uses `LIMIT`/`OFFSET` over primary-key order plus a separate
//! count. Inserts that carry an explicit id run in a transaction that also
//! moves the id sequence past the largest stored id, so later generated ids
//! never collide with client-chosen ones. Once the sequence reaches
//! `i64::MAX`, generated inserts fail as query errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use pagination::{Page, PageRequest};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

use super::error_mapping::{map_corrupt_row, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

// Marks the larger of the stored maximum and the sequence's own position as
// used, so the sequence never moves backwards. At `i64::MAX` the next
// `nextval` fails instead of overflowing here.
const RESYNC_ID_SEQUENCE: &str = "SELECT setval(seq, GREATEST(MAX(users.id), pg_sequence_last_value(seq))) \
     FROM users, (SELECT pg_get_serial_sequence('users', 'id')::regclass AS seq) AS serial \
     GROUP BY seq";

const RESTART_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('users', 'id'), 1, false)";

/// Diesel-backed implementation of the `UserRepository` port.
///
/// # Example
///
/// ```no_run
/// use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
/// let repository = DieselUserRepository::new(pool);
/// # let _ = repository;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    User::try_from(row).map_err(|err| map_corrupt_row(id, err))
}

fn to_i64(value: u64) -> Result<i64, UserPersistenceError> {
    i64::try_from(value).map_err(|_| UserPersistenceError::query("page window out of range"))
}

async fn insert_with_id(
    conn: &mut AsyncPgConnection,
    row: NewUserRow<'_>,
) -> Result<UserRow, diesel::result::Error> {
    conn.transaction(|conn| {
        async move {
            let stored = diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result(conn)
                .await?;
            diesel::sql_query(RESYNC_ID_SEQUENCE).execute(conn).await?;
            Ok(stored)
        }
        .scope_boxed()
    })
    .await
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(to_user).transpose()
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .limit(to_i64(request.limit())?)
            .offset(to_i64(request.offset())?)
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        let items = rows
            .into_iter()
            .map(to_user)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(
            items,
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let requested_id = user.id.map(UserId::get);
        let row = NewUserRow::from(&user);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let stored = if requested_id.is_some() {
            insert_with_id(&mut conn, row).await
        } else {
            diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result(&mut conn)
                .await
        }
        .map_err(|err| map_diesel_error(err, requested_id))?;

        to_user(stored)
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(users::table.find(id.get()))
            .set(UserChangeset::from(&changes))
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(to_user).transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(removed > 0)
    }

    async fn clear(&self) -> Result<u64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = conn
            .transaction(|conn| {
                async move {
                    let removed = diesel::delete(users::table).execute(conn).await?;
                    diesel::sql_query(RESTART_ID_SEQUENCE).execute(conn).await?;
                    Ok::<_, diesel::result::Error>(removed)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(u64::try_from(removed).unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(())
    }
}
