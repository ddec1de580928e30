//! Habit domain service.
//!
//! Implements both habit driving ports over a [`HabitRepository`]. Repository
//! failures are logged with their cause and surfaced to callers as internal
//! errors carrying a fixed, per-operation message so storage details never
//! leak to clients.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{HabitRepository, HabitRepositoryError, HabitsCommand, HabitsQuery};
use crate::domain::{Error, Habit, HabitDetails, HabitId};

/// Client-facing message for failed reads.
pub const READ_FAILED_MESSAGE: &str = "Database connection failed";
/// Client-facing message for failed inserts.
pub const CREATE_FAILED_MESSAGE: &str = "Could not create entity";
/// Client-facing message for failed updates.
pub const UPDATE_FAILED_MESSAGE: &str = "Update failed";
/// Client-facing message for failed deletes.
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete entity";

fn repository_failure(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(HabitRepositoryError) -> Error {
    move |err| {
        error!(operation, error = %err, "habit repository call failed");
        Error::internal(message)
    }
}

fn not_found(id: &HabitId) -> Error {
    Error::not_found(format!("habit {id} not found"))
}

/// Habit service implementing the query and command driving ports.
#[derive(Clone)]
pub struct HabitService<R> {
    habit_repo: Arc<R>,
}

impl<R> HabitService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(habit_repo: Arc<R>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl<R> HabitsQuery for HabitService<R>
where
    R: HabitRepository,
{
    async fn list_habits(&self) -> Result<Vec<Habit>, Error> {
        self.habit_repo
            .find_all()
            .await
            .map_err(repository_failure("list", READ_FAILED_MESSAGE))
    }

    async fn fetch_habit(&self, id: &HabitId) -> Result<Habit, Error> {
        self.habit_repo
            .find_by_id(id)
            .await
            .map_err(repository_failure("get", READ_FAILED_MESSAGE))?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> HabitsCommand for HabitService<R>
where
    R: HabitRepository,
{
    async fn create_habit(&self, details: HabitDetails) -> Result<Habit, Error> {
        let habit = Habit::new(HabitId::random(), details);
        let created = self
            .habit_repo
            .insert(&habit)
            .await
            .map_err(repository_failure("create", CREATE_FAILED_MESSAGE))?;
        debug!(habit_id = %created.id(), "habit created");
        Ok(created)
    }

    async fn update_habit(&self, id: HabitId, details: HabitDetails) -> Result<(), Error> {
        let habit = Habit::new(id, details);
        let rows = self
            .habit_repo
            .update_by_id(&habit)
            .await
            .map_err(repository_failure("update", UPDATE_FAILED_MESSAGE))?;
        if rows == 0 {
            return Err(not_found(&id));
        }
        Ok(())
    }

    async fn delete_habit(&self, id: &HabitId) -> Result<(), Error> {
        let rows = self
            .habit_repo
            .delete_by_id(id)
            .await
            .map_err(repository_failure("delete", DELETE_FAILED_MESSAGE))?;
        if rows == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "habits_service_tests.rs"]
mod tests;
