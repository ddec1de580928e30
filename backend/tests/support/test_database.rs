//! Helpers for integration tests that need a live PostgreSQL database.
//!
//! Point `HABITS_TEST_DATABASE_URL` at a disposable database to run them.
//! When the variable is unset the tests print a skip marker and return, so a
//! plain `cargo test` stays green on machines without PostgreSQL. Once the
//! variable is set, setup failures panic instead of being masked.

use std::sync::Mutex;

use habits_backend::outbound::persistence::Migrator;

pub const TEST_DATABASE_URL_ENV: &str = "HABITS_TEST_DATABASE_URL";

static MIGRATED: Mutex<bool> = Mutex::new(false);

/// The configured test database URL, if any.
pub fn test_database_url() -> Option<String> {
    std::env::var(TEST_DATABASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Apply the embedded migrations once per test binary.
pub fn migrate_schema(database_url: &str) -> Result<(), String> {
    let mut migrated = MIGRATED.lock().map_err(|err| err.to_string())?;
    if *migrated {
        return Ok(());
    }
    let mut migrator = Migrator::connect(database_url).map_err(|err| err.to_string())?;
    migrator.run_pending().map_err(|err| err.to_string())?;
    *migrated = true;
    Ok(())
}

/// Report a skipped test when no database is configured.
pub fn skip(test_name: &str) {
    eprintln!("SKIP-TEST-DATABASE: {test_name} skipped; set {TEST_DATABASE_URL_ENV} to run it");
}
