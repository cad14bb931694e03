//! Deterministic example user data generation for demonstration purposes.
//!
//! The backend seeds its storage with these users at startup so that a fresh
//! instance has something to list and paginate. Generation is independent of
//! backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic user generation from a numeric seed
//! - Name and email validation matching backend constraints
//!
//! # Example
//!
//! ```
//! use example_data::{SeedDefinition, generate_example_users, is_valid_email};
//!
//! let users = generate_example_users(&SeedDefinition::new(2026, 3))
//!     .expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! assert!(users.iter().all(|user| is_valid_email(&user.email)));
//! ```

mod error;
mod generator;
mod seed;
mod validation;

pub use error::GenerationError;
pub use generator::{MAX_USERS, generate_example_users};
pub use seed::{ExampleUserSeed, SeedDefinition};
pub use validation::{NAME_MAX, is_valid_email, is_valid_name};
