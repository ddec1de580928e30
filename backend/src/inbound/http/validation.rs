//! Validation helpers for the habit HTTP adapter.
//!
//! Validation is presence-only: a required field fails when its string is
//! empty. Values are never trimmed or format-checked.

use std::fmt;

use tracing::debug;

use crate::domain::{Error, HabitId};
use crate::inbound::http::habits::HabitTransfer;

/// Client-facing message for a malformed path identifier.
pub const INVALID_URL_PARAMS_MESSAGE: &str = "Invalid request url params";

/// Newtype wrapper for wire field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const DESCRIPTION: FieldName = FieldName::new("description");
pub const COLOUR_HEX: FieldName = FieldName::new("colourHex");
pub const ICON_BASE64: FieldName = FieldName::new("iconBase64");
pub const MODE_TYPE: FieldName = FieldName::new("modeType");

/// One required field that was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    field: FieldName,
}

impl FieldViolation {
    pub fn missing(field: FieldName) -> Self {
        Self { field }
    }

    /// Wire name of the offending field.
    pub fn field(&self) -> FieldName {
        self.field
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.field.as_str())
    }
}

/// Check that every required habit field is non-empty.
///
/// Violations are reported in the fixed order `description`, `colourHex`,
/// `iconBase64`, `modeType`. The `id` field is never required.
///
/// # Examples
/// ```
/// use habits_backend::inbound::http::habits::HabitTransfer;
/// use habits_backend::inbound::http::validation::validate_habit;
///
/// let transfer = HabitTransfer {
///     description: "Drink water".into(),
///     ..HabitTransfer::default()
/// };
/// let violations = validate_habit(&transfer).expect_err("three fields are empty");
/// assert_eq!(violations[0].to_string(), "missing required field: colourHex");
/// assert_eq!(violations.len(), 3);
/// ```
pub fn validate_habit(transfer: &HabitTransfer) -> Result<(), Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = [
        (DESCRIPTION, &transfer.description),
        (COLOUR_HEX, &transfer.colour_hex),
        (ICON_BASE64, &transfer.icon_base64),
        (MODE_TYPE, &transfer.mode_type),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| FieldViolation::missing(field))
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Validate a transfer and convert violations into a domain error.
pub(crate) fn require_habit_fields(transfer: &HabitTransfer) -> Result<(), Error> {
    validate_habit(transfer).map_err(|violations| {
        Error::validation_failed(violations.iter().map(ToString::to_string).collect())
    })
}

/// Parse the `{id}` path segment into a [`HabitId`].
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, Error> {
    HabitId::new(raw).map_err(|err| {
        debug!(id = raw, error = %err, "rejecting habit path id");
        Error::invalid_request(INVALID_URL_PARAMS_MESSAGE)
    })
}
