//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. When a migration
//! changes the table, regenerate with `diesel print-schema` or edit by hand.

diesel::table! {
    /// Habit records. `id` is a server-assigned UUID v4.
    habits (id) {
        id -> Uuid,
        description -> Text,
        colour_hex -> Text,
        icon_base64 -> Text,
        mode_type -> Text,
    }
}
