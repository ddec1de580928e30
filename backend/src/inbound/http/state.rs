//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{HabitsCommand, HabitsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub habits: Arc<dyn HabitsCommand>,
    pub habits_query: Arc<dyn HabitsQuery>,
}

impl HttpState {
    /// Construct state from the habit driving ports.
    ///
    /// Both ports are usually the same [`crate::domain::HabitService`]
    /// instance.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use habits_backend::domain::HabitService;
    /// use habits_backend::inbound::http::state::HttpState;
    /// use habits_backend::outbound::persistence::{DbPool, DieselHabitRepository};
    ///
    /// fn build(pool: DbPool) -> HttpState {
    ///     let service = Arc::new(HabitService::new(Arc::new(DieselHabitRepository::new(pool))));
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(habits: Arc<dyn HabitsCommand>, habits_query: Arc<dyn HabitsQuery>) -> Self {
        Self {
            habits,
            habits_query,
        }
    }
}
