//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod habit_repository;
mod habits_command;
mod habits_query;

#[cfg(test)]
pub use habit_repository::MockHabitRepository;
pub use habit_repository::{HabitRepository, HabitRepositoryError};
#[cfg(test)]
pub use habits_command::MockHabitsCommand;
pub use habits_command::HabitsCommand;
#[cfg(test)]
pub use habits_query::MockHabitsQuery;
pub use habits_query::HabitsQuery;
