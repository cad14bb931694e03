//! User data model.
//!
//! Every field of a [`User`] is a validated newtype so that an instance can
//! only exist in a state the API is willing to serve. Constructors return
//! [`UserValidationError`], which names the offending field and a stable code
//! for client-facing error details.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum length accepted for first and last names.
pub const NAME_MAX: usize = 100;

/// Maximum length accepted for email addresses.
pub const EMAIL_MAX: usize = 254;

/// Validation errors raised by the user newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifiers must be strictly positive.
    #[error("user id must be a positive integer, got {value}")]
    InvalidId {
        /// Rejected raw value.
        value: i64,
    },
    /// Email does not look like `local@domain.tld`.
    #[error("value is not a valid email address")]
    InvalidEmail,
    /// Email exceeds [`EMAIL_MAX`] characters.
    #[error("email must be at most {max} characters")]
    EmailTooLong {
        /// Upper bound in force.
        max: usize,
    },
    /// A required name was blank.
    #[error("{field} must not be empty")]
    EmptyName {
        /// `first_name` or `last_name`.
        field: &'static str,
    },
    /// A name exceeds [`NAME_MAX`] characters.
    #[error("{field} must be at most {max} characters")]
    NameTooLong {
        /// `first_name` or `last_name`.
        field: &'static str,
        /// Upper bound in force.
        max: usize,
    },
    /// Avatar is not an absolute `http`/`https` URL with a host.
    #[error("avatar must be an absolute http or https URL")]
    InvalidAvatar,
}

impl UserValidationError {
    /// JSON field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "id",
            Self::InvalidEmail | Self::EmailTooLong { .. } => "email",
            Self::EmptyName { field } | Self::NameTooLong { field, .. } => *field,
            Self::InvalidAvatar => "avatar",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "invalid_id",
            Self::InvalidEmail => "invalid_email",
            Self::EmptyName { .. } => "blank",
            Self::EmailTooLong { .. } | Self::NameTooLong { .. } => "too_long",
            Self::InvalidAvatar => "invalid_url",
        }
    }
}

/// Positive numeric user identifier.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(value: i64) -> Result<Self, UserValidationError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidId { value })
        }
    }

    /// Raw identifier value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains the shape.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s.]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address with a `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("a@b.com").is_ok());
    /// assert!(EmailAddress::new("email").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        if value.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&value) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// First or last name.
///
/// Names are stored exactly as supplied; only blank and oversized values are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate a first name.
    pub fn first(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::validated("first_name", value.into())
    }

    /// Validate a last name.
    pub fn last(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::validated("last_name", value.into())
    }

    fn validated(field: &'static str, value: String) -> Result<Self, UserValidationError> {
        if value.trim().is_empty() {
            return Err(UserValidationError::EmptyName { field });
        }
        if value.chars().count() > NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                field,
                max: NAME_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Absolute `http`/`https` URL of an avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarUrl(String);

impl AvatarUrl {
    /// Validate and construct an [`AvatarUrl`].
    ///
    /// The original string is kept so clients read back exactly what they
    /// wrote.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::AvatarUrl;
    ///
    /// assert!(AvatarUrl::new("http://x/y.png").is_ok());
    /// assert!(AvatarUrl::new("avatar").is_err());
    /// assert!(AvatarUrl::new("ftp://x/y.png").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        let url = Url::parse(&value).map_err(|_| UserValidationError::InvalidAvatar)?;
        let scheme_ok = matches!(url.scheme(), "http" | "https");
        let host_ok = url.host_str().is_some_and(|host| !host.is_empty());
        if scheme_ok && host_ok {
            Ok(Self(value))
        } else {
            Err(UserValidationError::InvalidAvatar)
        }
    }
}

impl AsRef<str> for AvatarUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AvatarUrl> for String {
    fn from(value: AvatarUrl) -> Self {
        value.0
    }
}

impl TryFrom<String> for AvatarUrl {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The mutable, validated part of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Contact email.
    pub email: EmailAddress,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Avatar image URL.
    pub avatar: AvatarUrl,
}

/// A user that has not been stored yet.
///
/// When `id` is `None` the repository assigns the next free identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Client-chosen identifier, if any.
    pub id: Option<UserId>,
    /// Validated fields.
    pub profile: UserProfile,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement email.
    pub email: Option<EmailAddress>,
    /// Replacement first name.
    pub first_name: Option<PersonName>,
    /// Replacement last name.
    pub last_name: Option<PersonName>,
    /// Replacement avatar.
    pub avatar: Option<AvatarUrl>,
}

impl UserChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar.is_none()
    }
}

impl From<UserProfile> for UserChanges {
    fn from(profile: UserProfile) -> Self {
        Self {
            email: Some(profile.email),
            first_name: Some(profile.first_name),
            last_name: Some(profile.last_name),
            avatar: Some(profile.avatar),
        }
    }
}

/// Application user.
///
/// Serialises to the public user JSON:
///
/// ```json
/// { "id": 1, "email": "a@b.com", "first_name": "A", "last_name": "B", "avatar": "http://x/y.png" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    first_name: PersonName,
    last_name: PersonName,
    avatar: AvatarUrl,
}

impl User {
    /// Assemble a user from an identifier and validated fields.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        let UserProfile {
            email,
            first_name,
            last_name,
            avatar,
        } = profile;
        Self {
            id,
            email,
            first_name,
            last_name,
            avatar,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Contact email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Given name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Avatar image URL.
    pub fn avatar(&self) -> &AvatarUrl {
        &self.avatar
    }

    /// Return a copy with `changes` applied; the identifier never changes.
    #[must_use]
    pub fn with_changes(&self, changes: UserChanges) -> Self {
        let UserChanges {
            email,
            first_name,
            last_name,
            avatar,
        } = changes;
        Self {
            id: self.id,
            email: email.unwrap_or_else(|| self.email.clone()),
            first_name: first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| self.last_name.clone()),
            avatar: avatar.unwrap_or_else(|| self.avatar.clone()),
        }
    }
}
