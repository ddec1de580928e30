//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary, so the
//! `habits-migrate` tool and the integration tests always apply the schema
//! that matches [`super::schema`]. Migrations run over a synchronous
//! `PgConnection` because `diesel_migrations` drives a blocking harness.

use diesel::Connection;
use diesel::pg::{Pg, PgConnection};
use diesel::migration::{Migration, MigrationName, MigrationSource};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while connecting or applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    #[error("migration failed: {message}")]
    Apply { message: String },
}

impl MigrationError {
    fn apply(error: impl std::fmt::Display) -> Self {
        Self::Apply {
            message: error.to_string(),
        }
    }
}

/// Applied state of a single embedded migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub name: String,
    pub version: String,
    pub applied: bool,
}

/// Blocking migration runner bound to one connection.
pub struct Migrator {
    conn: PgConnection,
}

impl Migrator {
    /// Open a dedicated connection to `database_url`.
    pub fn connect(database_url: &str) -> Result<Self, MigrationError> {
        let conn =
            PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
                message: err.to_string(),
            })?;
        Ok(Self { conn })
    }

    /// Apply every pending migration, returning the applied versions.
    pub fn run_pending(&mut self) -> Result<Vec<String>, MigrationError> {
        let versions = self
            .conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(MigrationError::apply)?;
        Ok(versions.iter().map(ToString::to_string).collect())
    }

    /// Apply the next pending migration only.
    pub fn run_next(&mut self) -> Result<String, MigrationError> {
        self.conn
            .run_next_migration(MIGRATIONS)
            .map(|version| version.to_string())
            .map_err(MigrationError::apply)
    }

    /// Revert the most recently applied migration.
    pub fn revert_last(&mut self) -> Result<String, MigrationError> {
        self.conn
            .revert_last_migration(MIGRATIONS)
            .map(|version| version.to_string())
            .map_err(MigrationError::apply)
    }

    /// Revert the most recent migration and apply it again.
    pub fn redo(&mut self) -> Result<String, MigrationError> {
        self.revert_last()?;
        self.run_next()
    }

    /// Revert every applied migration.
    pub fn revert_all(&mut self) -> Result<Vec<String>, MigrationError> {
        let versions = self
            .conn
            .revert_all_migrations(MIGRATIONS)
            .map_err(MigrationError::apply)?;
        Ok(versions.iter().map(ToString::to_string).collect())
    }

    /// Report every embedded migration with whether it has been applied.
    pub fn status(&mut self) -> Result<Vec<MigrationStatus>, MigrationError> {
        let applied: Vec<String> = self
            .conn
            .applied_migrations()
            .map_err(MigrationError::apply)?
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(embedded_migrations()?
            .into_iter()
            .map(|(name, version)| MigrationStatus {
                applied: applied.contains(&version),
                name,
                version,
            })
            .collect())
    }

    /// Most recently applied version, or `None` on an empty database.
    pub fn version(&mut self) -> Result<Option<String>, MigrationError> {
        let applied = self
            .conn
            .applied_migrations()
            .map_err(MigrationError::apply)?;
        Ok(applied.iter().map(ToString::to_string).max())
    }
}

/// Names and versions of the embedded migrations, oldest first.
pub fn embedded_migrations() -> Result<Vec<(String, String)>, MigrationError> {
    let mut migrations: Vec<(String, String)> = MigrationSource::<Pg>::migrations(&MIGRATIONS)
        .map_err(MigrationError::apply)?
        .iter()
        .map(|migration| {
            (
                migration.name().to_string(),
                migration.name().version().to_string(),
            )
        })
        .collect();
    migrations.sort_by(|left, right| left.1.cmp(&right.1));
    Ok(migrations)
}
