//! In-memory habit repository for behavioural tests.
//!
//! Rows are kept in a `BTreeMap` keyed by UUID so listing order matches the
//! Diesel adapter's `ORDER BY id`.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use habits_backend::domain::ports::{HabitRepository, HabitRepositoryError};
use habits_backend::domain::{Habit, HabitId};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryHabitRepository {
    rows: Mutex<BTreeMap<Uuid, Habit>>,
    unavailable: AtomicBool,
}

impl InMemoryHabitRepository {
    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn seed(&self, habit: Habit) {
        self.rows
            .lock()
            .expect("rows lock")
            .insert(*habit.id().as_uuid(), habit);
    }

    pub fn get(&self, id: &HabitId) -> Option<Habit> {
        self.rows
            .lock()
            .expect("rows lock")
            .get(id.as_uuid())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    fn check_available(&self) -> Result<(), HabitRepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HabitRepositoryError::connection("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn find_all(&self) -> Result<Vec<Habit>, HabitRepositoryError> {
        self.check_available()?;
        Ok(self
            .rows
            .lock()
            .expect("rows lock")
            .values()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, HabitRepositoryError> {
        self.check_available()?;
        Ok(self.get(id))
    }

    async fn insert(&self, habit: &Habit) -> Result<Habit, HabitRepositoryError> {
        self.check_available()?;
        let mut rows = self.rows.lock().expect("rows lock");
        if rows.contains_key(habit.id().as_uuid()) {
            return Err(HabitRepositoryError::query("duplicate key value"));
        }
        rows.insert(*habit.id().as_uuid(), habit.clone());
        Ok(habit.clone())
    }

    async fn update_by_id(&self, habit: &Habit) -> Result<u64, HabitRepositoryError> {
        self.check_available()?;
        let mut rows = self.rows.lock().expect("rows lock");
        match rows.get_mut(habit.id().as_uuid()) {
            Some(row) => {
                *row = habit.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &HabitId) -> Result<u64, HabitRepositoryError> {
        self.check_available()?;
        let removed = self.rows.lock().expect("rows lock").remove(id.as_uuid());
        Ok(u64::from(removed.is_some()))
    }
}
