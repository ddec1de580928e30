//! Internal Diesel row structs for the habits table.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Habit, HabitDetails, HabitId};

use super::schema::habits;

/// Row struct for reading from the habits table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = habits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HabitRow {
    pub id: Uuid,
    pub description: String,
    pub colour_hex: String,
    pub icon_base64: String,
    pub mode_type: String,
}

impl From<HabitRow> for Habit {
    fn from(row: HabitRow) -> Self {
        let HabitRow {
            id,
            description,
            colour_hex,
            icon_base64,
            mode_type,
        } = row;
        Habit::new(
            HabitId::from_uuid(id),
            HabitDetails {
                description,
                colour_hex,
                icon_base64,
                mode_type,
            },
        )
    }
}

/// Insertable struct for creating habit records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = habits)]
pub(crate) struct NewHabitRow<'a> {
    pub id: Uuid,
    pub description: &'a str,
    pub colour_hex: &'a str,
    pub icon_base64: &'a str,
    pub mode_type: &'a str,
}

impl<'a> From<&'a Habit> for NewHabitRow<'a> {
    fn from(habit: &'a Habit) -> Self {
        let details = habit.details();
        Self {
            id: *habit.id().as_uuid(),
            description: &details.description,
            colour_hex: &details.colour_hex,
            icon_base64: &details.icon_base64,
            mode_type: &details.mode_type,
        }
    }
}

/// Changeset for updating a habit.
///
/// Carries exactly the four mutable columns; `id` is absent so an update can
/// never rewrite the primary key.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = habits)]
pub(crate) struct HabitChangeset<'a> {
    pub description: &'a str,
    pub colour_hex: &'a str,
    pub icon_base64: &'a str,
    pub mode_type: &'a str,
}

impl<'a> From<&'a HabitDetails> for HabitChangeset<'a> {
    fn from(details: &'a HabitDetails) -> Self {
        Self {
            description: &details.description,
            colour_hex: &details.colour_hex,
            icon_base64: &details.icon_base64,
            mode_type: &details.mode_type,
        }
    }
}
