//! Apply, revert and inspect the embedded schema migrations.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use habits_backend::outbound::persistence::{MigrationStatus, Migrator};
use habits_backend::settings::DatabaseSettings;
use ortho_config::OrthoConfig;

/// `habits-migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "habits-migrate",
    about = "Manage the habits database schema",
    version
)]
struct CliArgs {
    /// Database connection URL. Built from the `DB_*` settings when omitted.
    #[arg(long = "database-url", value_name = "url", global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Apply all pending migrations.
    Up,
    /// Apply the next pending migration.
    UpByOne,
    /// Revert the most recent migration.
    Down,
    /// Revert and re-apply the most recent migration.
    Redo,
    /// Revert every migration.
    Reset,
    /// List migrations and whether each has been applied.
    Status,
    /// Print the current schema version.
    Version,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url)?;
    let mut migrator = Migrator::connect(&database_url)?;
    for line in run(&mut migrator, args.command)? {
        println!("{line}");
    }
    Ok(())
}

fn resolve_database_url(explicit: Option<String>) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url);
    }
    let settings = DatabaseSettings::load_from_iter([OsString::from("habits-migrate")])
        .map_err(|err| color_eyre::eyre::eyre!("{err}"))
        .wrap_err("failed to load database settings")?;
    Ok(settings.database_url()?)
}

fn run(migrator: &mut Migrator, command: Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Up => applied_lines("applied", migrator.run_pending()?),
        Command::UpByOne => vec![format!("applied {}", migrator.run_next()?)],
        Command::Down => vec![format!("reverted {}", migrator.revert_last()?)],
        Command::Redo => vec![format!("redone {}", migrator.redo()?)],
        Command::Reset => applied_lines("reverted", migrator.revert_all()?),
        Command::Status => migrator.status()?.iter().map(status_line).collect(),
        Command::Version => vec![
            migrator
                .version()?
                .unwrap_or_else(|| "no migrations applied".to_owned()),
        ],
    };
    Ok(lines)
}

fn applied_lines(verb: &str, versions: Vec<String>) -> Vec<String> {
    if versions.is_empty() {
        return vec![format!("nothing {verb}")];
    }
    versions
        .into_iter()
        .map(|version| format!("{verb} {version}"))
        .collect()
}

fn status_line(status: &MigrationStatus) -> String {
    let state = if status.applied { "applied" } else { "pending" };
    format!("{state:<8} {}", status.name)
}
