//! Driving port for habit mutations.

use async_trait::async_trait;

use crate::domain::{Error, Habit, HabitDetails, HabitId};

/// Write-side use-cases consumed by inbound adapters.
///
/// Callers pass attributes that have already passed presence validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitsCommand: Send + Sync {
    /// Persist a new habit under a freshly generated identifier.
    async fn create_habit(&self, details: HabitDetails) -> Result<Habit, Error>;

    /// Replace the attributes of an existing habit.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no habit has
    /// the identifier.
    async fn update_habit(&self, id: HabitId, details: HabitDetails) -> Result<(), Error>;

    /// Remove a habit.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no habit has
    /// the identifier, including when it was already deleted.
    async fn delete_habit(&self, id: &HabitId) -> Result<(), Error>;
}
