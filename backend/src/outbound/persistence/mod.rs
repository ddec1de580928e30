//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapter**: [`DieselHabitRepository`] only translates between
//!   Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: connections come from a `bb8` pool of
//!   `diesel-async` connections.
//!
//! # Example
//!
//! ```no_run
//! use habits_backend::outbound::persistence::{DbPool, DieselHabitRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), habits_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/habits")).await?;
//! let repo = DieselHabitRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_habit_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_habit_repository::DieselHabitRepository;
pub use migrations::{MIGRATIONS, MigrationError, MigrationStatus, Migrator};
pub use pool::{DbPool, PoolConfig, PoolError};
