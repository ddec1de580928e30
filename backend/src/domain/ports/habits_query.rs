//! Driving port for habit reads.

use async_trait::async_trait;

use crate::domain::{Error, Habit, HabitId};

/// Read-side use-cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitsQuery: Send + Sync {
    /// List every habit. An empty store yields an empty vector.
    async fn list_habits(&self) -> Result<Vec<Habit>, Error>;

    /// Fetch one habit; fails with [`crate::domain::ErrorCode::NotFound`] when
    /// the identifier is unknown.
    async fn fetch_habit(&self, id: &HabitId) -> Result<Habit, Error>;
}
