//! PostgreSQL-backed `HabitRepository` implementation using Diesel ORM.
//!
//! Each port method issues exactly one statement on a pooled connection.
//! Statements are logged at `debug` level on this module's target, which the
//! `DB_DEBUG` setting switches on.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{HabitRepository, HabitRepositoryError};
use crate::domain::{Habit, HabitId};

use super::models::{HabitChangeset, HabitRow, NewHabitRow};
use super::pool::{DbPool, PoolError};
use super::schema::habits;

/// Diesel-backed implementation of the habit repository port.
#[derive(Clone)]
pub struct DieselHabitRepository {
    pool: DbPool,
}

impl DieselHabitRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> HabitRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            HabitRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> HabitRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            HabitRepositoryError::connection(info.message().to_owned())
        }
        other => HabitRepositoryError::query(other.to_string()),
    }
}

fn rows_affected(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

#[async_trait]
impl HabitRepository for DieselHabitRepository {
    async fn find_all(&self) -> Result<Vec<Habit>, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = habits::table
            .order(habits::id.asc())
            .select(HabitRow::as_select());
        debug!(statement = %diesel::debug_query::<Pg, _>(&query), "find_all");

        let rows: Vec<HabitRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Habit::from).collect())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = habits::table
            .filter(habits::id.eq(*id.as_uuid()))
            .select(HabitRow::as_select());
        debug!(statement = %diesel::debug_query::<Pg, _>(&query), "find_by_id");

        let row = query
            .first::<HabitRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Habit::from))
    }

    async fn insert(&self, habit: &Habit) -> Result<Habit, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = diesel::insert_into(habits::table)
            .values(NewHabitRow::from(habit))
            .returning(HabitRow::as_returning());
        debug!(statement = %diesel::debug_query::<Pg, _>(&query), "insert");

        let row: HabitRow = query.get_result(&mut conn).await.map_err(map_diesel_error)?;
        Ok(Habit::from(row))
    }

    async fn update_by_id(&self, habit: &Habit) -> Result<u64, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = diesel::update(habits::table.filter(habits::id.eq(*habit.id().as_uuid())))
            .set(HabitChangeset::from(habit.details()));
        debug!(statement = %diesel::debug_query::<Pg, _>(&query), "update_by_id");

        query
            .execute(&mut conn)
            .await
            .map(rows_affected)
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: &HabitId) -> Result<u64, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = diesel::delete(habits::table.filter(habits::id.eq(*id.as_uuid())));
        debug!(statement = %diesel::debug_query::<Pg, _>(&query), "delete_by_id");

        query
            .execute(&mut conn)
            .await
            .map(rows_affected)
            .map_err(map_diesel_error)
    }
}
