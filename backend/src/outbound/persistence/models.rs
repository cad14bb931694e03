//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{
    AvatarUrl, EmailAddress, NewUser, PersonName, User, UserChanges, UserId, UserProfile,
    UserValidationError,
};

use super::schema::users;

/// Row struct for reading from the users table.
///
/// Audit timestamps are maintained by the database and not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            id,
            email,
            first_name,
            last_name,
            avatar,
        } = row;
        Ok(User::new(
            UserId::new(id)?,
            UserProfile {
                email: EmailAddress::new(email)?,
                first_name: PersonName::first(first_name)?,
                last_name: PersonName::last(last_name)?,
                avatar: AvatarUrl::new(avatar)?,
            },
        ))
    }
}

/// Insertable struct for creating user records.
///
/// A `None` id inserts `DEFAULT`, letting the sequence assign it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Option<i64>,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub avatar: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        let profile = &user.profile;
        Self {
            id: user.id.map(UserId::get),
            email: profile.email.as_ref(),
            first_name: profile.first_name.as_ref(),
            last_name: profile.last_name.as_ref(),
            avatar: profile.avatar.as_ref(),
        }
    }
}

/// Changeset struct for partial updates; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

impl<'a> From<&'a UserChanges> for UserChangeset<'a> {
    fn from(changes: &'a UserChanges) -> Self {
        Self {
            email: changes.email.as_ref().map(AsRef::as_ref),
            first_name: changes.first_name.as_ref().map(AsRef::as_ref),
            last_name: changes.last_name.as_ref().map(AsRef::as_ref),
            avatar: changes.avatar.as_ref().map(AsRef::as_ref),
        }
    }
}
