//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Diesel row structs (`models.rs`) and the `table!` schema (`schema.rs`) are
//! private to this module; only the repository, pool, and migration runner
//! are exported. Every database failure is mapped to
//! [`UserPersistenceError`](crate::domain::ports::UserPersistenceError).
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig, run_migrations};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/users";
//! run_migrations(url)?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repository = DieselUserRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_POOL_SIZE, DbPool, PoolConfig, PoolError};
