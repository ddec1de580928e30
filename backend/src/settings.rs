//! Service configuration loaded via OrthoConfig.
//!
//! Two groups are read from the environment (and any OrthoConfig file):
//! `SERVER_*` for the HTTP listener and `DB_*` for PostgreSQL. Both are
//! loaded once at startup; a missing required database value aborts the
//! process before anything binds.

use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const PERSISTENCE_TARGET: &str = "habits_backend::outbound::persistence";

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configuration sources could not be read or parsed.
    #[error("failed to load {group} settings: {message}")]
    Load { group: &'static str, message: String },
    /// A required value is absent.
    #[error("missing required setting {key}")]
    Missing { key: &'static str },
    /// The values do not form a usable connection URL.
    #[error("invalid database settings: {message}")]
    InvalidDatabaseUrl { message: String },
}

/// HTTP listener settings (`SERVER_*`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SERVER")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Seconds allowed for a client to send request headers.
    #[ortho_config(default = 5)]
    pub timeout_read: u64,
    /// Seconds allowed to flush a response before the connection is dropped.
    #[ortho_config(default = 10)]
    pub timeout_write: u64,
    /// Seconds an idle keep-alive connection is held open.
    #[ortho_config(default = 15)]
    pub timeout_idle: u64,
    /// Raise the default log level to `debug`.
    #[ortho_config(default = false)]
    pub debug: bool,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_read)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_write)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_idle)
    }
}

/// PostgreSQL settings (`DB_*`).
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub name: Option<String>,
    /// Log every statement at `debug` level.
    #[ortho_config(default = false)]
    pub debug: bool,
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("debug", &self.debug)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, SettingsError> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::Missing { key })
}

fn invalid(message: impl Into<String>) -> SettingsError {
    SettingsError::InvalidDatabaseUrl {
        message: message.into(),
    }
}

impl DatabaseSettings {
    /// Assemble a percent-encoded `postgres://` URL with TLS disabled.
    ///
    /// # Examples
    /// ```
    /// use habits_backend::settings::DatabaseSettings;
    ///
    /// let settings = DatabaseSettings {
    ///     host: Some("db".into()),
    ///     port: Some(5432),
    ///     user: Some("habits".into()),
    ///     pass: Some("p@ss word".into()),
    ///     name: Some("habits".into()),
    ///     debug: false,
    ///     pool_max_size: 10,
    /// };
    /// assert_eq!(
    ///     settings.database_url().expect("valid settings"),
    ///     "postgres://habits:p%40ss%20word@db:5432/habits?sslmode=disable"
    /// );
    /// ```
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let host = required(&self.host, "DB_HOST")?;
        let port = self.port.ok_or(SettingsError::Missing { key: "DB_PORT" })?;
        let user = required(&self.user, "DB_USER")?;
        let pass = required(&self.pass, "DB_PASS")?;
        let name = required(&self.name, "DB_NAME")?;

        let mut url = Url::parse("postgres://localhost").map_err(|err| invalid(err.to_string()))?;
        url.set_host(Some(host))
            .map_err(|err| invalid(format!("DB_HOST: {err}")))?;
        url.set_port(Some(port))
            .map_err(|()| invalid("DB_PORT cannot be applied"))?;
        url.set_username(user)
            .map_err(|()| invalid("DB_USER cannot be applied"))?;
        url.set_password(Some(pass))
            .map_err(|()| invalid("DB_PASS cannot be applied"))?;
        url.path_segments_mut()
            .map_err(|()| invalid("DB_NAME cannot be applied"))?
            .push(name);
        url.query_pairs_mut().append_pair("sslmode", "disable");
        Ok(url.into())
    }
}

/// Both settings groups, loaded together at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Load both groups from the environment and configuration files.
    ///
    /// Command-line arguments are not consulted; `program` only names the
    /// binary for OrthoConfig's diagnostics.
    pub fn load(program: &str) -> Result<Self, SettingsError> {
        let args = || [OsString::from(program)];
        let server = ServerSettings::load_from_iter(args()).map_err(|err| SettingsError::Load {
            group: "server",
            message: err.to_string(),
        })?;
        let database =
            DatabaseSettings::load_from_iter(args()).map_err(|err| SettingsError::Load {
                group: "database",
                message: err.to_string(),
            })?;
        Ok(Self { server, database })
    }

    /// Default `tracing` filter directives when `RUST_LOG` is unset.
    ///
    /// `info` normally, `debug` with `SERVER_DEBUG`; `DB_DEBUG` additionally
    /// raises the persistence adapter so every statement is logged.
    pub fn log_filter(&self) -> String {
        let level = if self.server.debug { "debug" } else { "info" };
        if self.database.debug {
            format!("{level},{PERSISTENCE_TARGET}=debug")
        } else {
            level.to_owned()
        }
    }
}
