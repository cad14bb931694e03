//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: mutex-guarded in-process storage, used when no database is
//!   configured
//! - **persistence**: PostgreSQL-backed storage using Diesel ORM
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
