//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The gateway owns a single `users` table. Rows are inserted at registration
//! and read by email during verification; email uniqueness is enforced by a
//! unique constraint, and a violation surfaces as
//! `UserPersistenceError::DuplicateEmail`.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use facegate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/facegate")).await?;
//! let repository = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
