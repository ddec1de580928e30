//! Port for habit persistence.
//!
//! [`HabitRepository`] is the gateway onto the single `habits` table. Each
//! method maps to exactly one statement. A zero rows-affected count from
//! update or delete is a normal outcome, not an error: it is how callers learn
//! that the identifier did not exist.

use async_trait::async_trait;

use crate::domain::{Habit, HabitId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by habit repository adapters.
    pub enum HabitRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "habit repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "habit repository query failed: {message}",
    }
}

/// Gateway for the habit table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Return every stored habit.
    async fn find_all(&self) -> Result<Vec<Habit>, HabitRepositoryError>;

    /// Fetch a habit by identifier, or `None` when no row matches.
    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, HabitRepositoryError>;

    /// Insert a new habit. The identifier must already be assigned.
    async fn insert(&self, habit: &Habit) -> Result<Habit, HabitRepositoryError>;

    /// Overwrite the four mutable attributes of the row matching `habit.id()`.
    ///
    /// The identifier column is never rewritten. Returns the number of rows
    /// affected.
    async fn update_by_id(&self, habit: &Habit) -> Result<u64, HabitRepositoryError>;

    /// Delete the row matching `id`, returning the number of rows affected.
    async fn delete_by_id(&self, id: &HabitId) -> Result<u64, HabitRepositoryError>;
}
