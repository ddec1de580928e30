//! Habit aggregate.
//!
//! A habit is identified by a server-assigned UUID and carries four free-text
//! attributes. The identifier never changes after creation; the attributes
//! are replaced wholesale on update, so they are grouped in [`HabitDetails`].

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Errors returned when parsing a [`HabitId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HabitIdError {
    /// The identifier text was empty.
    #[error("habit id must not be empty")]
    Empty,
    /// The identifier text is not a well-formed UUID.
    #[error("habit id must be a valid UUID")]
    Invalid,
}

/// Stable habit identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HabitId(Uuid);

impl HabitId {
    /// Parse a [`HabitId`] from its textual form.
    ///
    /// # Examples
    /// ```
    /// use habits_backend::domain::{HabitId, HabitIdError};
    ///
    /// let id = HabitId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert_eq!(HabitId::new("not-a-valid-uuid"), Err(HabitIdError::Invalid));
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, HabitIdError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(HabitIdError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| HabitIdError::Invalid)
    }

    /// Generate a fresh random identifier for a new habit.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from storage.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for HabitId {
    type Err = HabitIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The mutable attributes of a habit.
///
/// Values are stored verbatim: no trimming and no format checks. Presence is
/// enforced by the inbound validation layer before details reach the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDetails {
    /// What the habit is about, e.g. "Drink water".
    pub description: String,
    /// Display colour, conventionally `#RRGGBB`.
    pub colour_hex: String,
    /// Icon image, usually a `data:image/png;base64,...` URI.
    pub icon_base64: String,
    /// Cadence label such as `daily` or `weekly`.
    pub mode_type: String,
}

/// A persisted habit.
///
/// # Examples
/// ```
/// use habits_backend::domain::{Habit, HabitDetails, HabitId};
///
/// let habit = Habit::new(
///     HabitId::random(),
///     HabitDetails {
///         description: "Drink water".into(),
///         colour_hex: "#3366FF".into(),
///         icon_base64: "data:image/png;base64,iVBORw0KGgo=".into(),
///         mode_type: "daily".into(),
///     },
/// );
/// assert_eq!(habit.details().mode_type, "daily");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    id: HabitId,
    details: HabitDetails,
}

impl Habit {
    /// Assemble a habit from an identifier and its attributes.
    pub fn new(id: HabitId, details: HabitDetails) -> Self {
        Self { id, details }
    }

    /// Immutable identifier.
    pub fn id(&self) -> HabitId {
        self.id
    }

    /// Current attributes.
    pub fn details(&self) -> &HabitDetails {
        &self.details
    }

    /// Split the habit back into its identifier and attributes.
    pub fn into_parts(self) -> (HabitId, HabitDetails) {
        (self.id, self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", HabitIdError::Empty)]
    #[case("not-a-valid-uuid", HabitIdError::Invalid)]
    #[case("3fa85f64-5717-4562-b3fc", HabitIdError::Invalid)]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", HabitIdError::Invalid)]
    fn rejects_malformed_ids(#[case] raw: &str, #[case] expected: HabitIdError) {
        assert_eq!(HabitId::new(raw), Err(expected));
    }

    #[rstest]
    fn renders_canonical_lowercase_form() {
        let id = HabitId::new("3FA85F64-5717-4562-B3FC-2C963F66AFA6").expect("valid id");
        assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn random_ids_are_distinct() {
        assert_ne!(HabitId::random(), HabitId::random());
    }

    #[rstest]
    fn into_parts_returns_what_was_assembled() {
        let id = HabitId::random();
        let details = HabitDetails {
            description: "Write some code".into(),
            colour_hex: "#bbbbbb".into(),
            icon_base64: "data:image/png;base64,iVBORwsdsdasgoAAk+P+ErkJggg==".into(),
            mode_type: "daily".into(),
        };
        let (got_id, got_details) = Habit::new(id, details.clone()).into_parts();
        assert_eq!(got_id, id);
        assert_eq!(got_details, details);
    }
}
