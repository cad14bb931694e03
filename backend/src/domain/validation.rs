//! Field validation for user write payloads.
//!
//! Inbound adapters translate their wire formats into the raw drafts below.
//! Validation is pure: every field is checked, every failure is collected,
//! and the caller receives either fully validated domain values or the full
//! list of [`FieldError`]s.

use serde::Serialize;
use serde_json::json;

use crate::domain::{
    AvatarUrl, EmailAddress, Error, NewUser, PersonName, UserChanges, UserId, UserProfile,
    UserValidationError,
};

/// Message used for every validation failure response.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// JSON field or query parameter name.
    pub field: String,
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldError {
    /// Build a field error from its parts.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<UserValidationError> for FieldError {
    fn from(error: UserValidationError) -> Self {
        Self::new(error.field(), error.code(), error.to_string())
    }
}

/// Accumulator for field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record the error of a failed check, passing successful values through.
    pub fn check<T>(&mut self, result: Result<T, UserValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.push(error.into());
                None
            }
        }
    }

    /// Record an arbitrary field error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded errors in check order.
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Convert into the domain error returned to clients.
    ///
    /// The error carries `{"fields": [{field, code, message}, ...]}` details.
    pub fn into_error(self) -> Error {
        Error::validation_failed(VALIDATION_FAILED_MESSAGE).with_details(json!({ "fields": self.0 }))
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        errors.into_error()
    }
}

/// Unvalidated create or full-replacement payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Optional client-chosen identifier.
    pub id: Option<i64>,
    /// Raw email.
    pub email: String,
    /// Raw first name.
    pub first_name: String,
    /// Raw last name.
    pub last_name: String,
    /// Raw avatar URL.
    pub avatar: String,
}

impl UserDraft {
    /// Validate a create payload.
    ///
    /// # Errors
    ///
    /// Returns every field that failed validation.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::UserDraft;
    ///
    /// let draft = UserDraft {
    ///     id: None,
    ///     email: "email".to_owned(),
    ///     first_name: "A".to_owned(),
    ///     last_name: " ".to_owned(),
    ///     avatar: "avatar".to_owned(),
    /// };
    /// let errors = draft.validate_new().expect_err("three bad fields");
    /// assert_eq!(errors.as_slice().len(), 3);
    /// ```
    pub fn validate_new(self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::default();
        let id = self.id.map(|raw| errors.check(UserId::new(raw)));
        let profile = check_profile(
            &mut errors,
            self.email,
            self.first_name,
            self.last_name,
            self.avatar,
        );

        match (id, profile) {
            (None, Some(profile)) if errors.is_empty() => Ok(NewUser { id: None, profile }),
            (Some(Some(id)), Some(profile)) if errors.is_empty() => Ok(NewUser {
                id: Some(id),
                profile,
            }),
            _ => Err(errors),
        }
    }

    /// Validate a full-replacement payload.
    ///
    /// An `id` in the body is ignored; the path identifies the user.
    ///
    /// # Errors
    ///
    /// Returns every field that failed validation.
    pub fn validate_replacement(self) -> Result<UserProfile, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_profile(&mut errors, self.email, self.first_name, self.last_name, self.avatar)
            .ok_or(errors)
    }
}

fn check_profile(
    errors: &mut FieldErrors,
    email: String,
    first_name: String,
    last_name: String,
    avatar: String,
) -> Option<UserProfile> {
    let email = errors.check(EmailAddress::new(email));
    let first_name = errors.check(PersonName::first(first_name));
    let last_name = errors.check(PersonName::last(last_name));
    let avatar = errors.check(AvatarUrl::new(avatar));

    Some(UserProfile {
        email: email?,
        first_name: first_name?,
        last_name: last_name?,
        avatar: avatar?,
    })
}

/// Unvalidated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Raw email.
    pub email: Option<String>,
    /// Raw first name.
    pub first_name: Option<String>,
    /// Raw last name.
    pub last_name: Option<String>,
    /// Raw avatar URL.
    pub avatar: Option<String>,
}

impl UserPatch {
    /// Validate the supplied fields only.
    ///
    /// # Errors
    ///
    /// Returns every supplied field that failed validation.
    pub fn validate(self) -> Result<UserChanges, FieldErrors> {
        let mut errors = FieldErrors::default();
        let changes = UserChanges {
            email: self
                .email
                .and_then(|value| errors.check(EmailAddress::new(value))),
            first_name: self
                .first_name
                .and_then(|value| errors.check(PersonName::first(value))),
            last_name: self
                .last_name
                .and_then(|value| errors.check(PersonName::last(value))),
            avatar: self
                .avatar
                .and_then(|value| errors.check(AvatarUrl::new(value))),
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}
