//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed user entities and the use-cases the HTTP
//! adapter drives. Nothing in this module knows about Actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User and its validated field newtypes.
//! - UserDraft / UserPatch: raw payloads validated into domain values.
//! - UserDirectory: the service implementing the driving ports.
//! - TraceId: request correlation carried in task-local storage.

pub mod error;
mod example_data;
pub mod ports;
mod service_status;
mod trace_id;
pub mod user;
mod user_directory;
mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
pub use self::service_status::{ServiceStatus, SupportInfo};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AvatarUrl, EMAIL_MAX, EmailAddress, NAME_MAX, NewUser, PersonName, User, UserChanges, UserId,
    UserProfile, UserValidationError,
};
pub use self::user_directory::{USER_EXISTS_MESSAGE, USER_NOT_FOUND_MESSAGE, UserDirectory};
pub use self::validation::{
    FieldError, FieldErrors, UserDraft, UserPatch, VALIDATION_FAILED_MESSAGE,
};
