//! Translation of pool and Diesel failures into [`UserPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::UserValidationError;
use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map a Diesel failure; `requested_id` turns a unique violation on insert
/// into [`UserPersistenceError::Duplicate`].
pub(super) fn map_diesel_error(
    error: DieselError,
    requested_id: Option<i64>,
) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            match requested_id {
                Some(id) => UserPersistenceError::duplicate(id),
                None => UserPersistenceError::query(info.message().to_owned()),
            }
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            info,
        ) => UserPersistenceError::connection(info.message().to_owned()),
        DieselError::DatabaseError(_, info) => UserPersistenceError::query(info.message().to_owned()),
        DieselError::BrokenTransactionManager => {
            UserPersistenceError::connection("transaction manager broken")
        }
        other => UserPersistenceError::query(other.to_string()),
    }
}

/// Stored rows that no longer validate are reported as query failures.
pub(super) fn map_corrupt_row(id: i64, error: UserValidationError) -> UserPersistenceError {
    UserPersistenceError::query(format!("stored user {id} is invalid: {error}"))
}
