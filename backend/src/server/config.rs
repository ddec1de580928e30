//! HTTP server configuration object and helpers.

use std::time::Duration;

use habits_backend::outbound::persistence::DbPool;
use habits_backend::settings::ServerSettings;

/// Connection-level timeouts applied to every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTimeouts {
    pub(crate) read: Duration,
    pub(crate) write: Duration,
    pub(crate) idle: Duration,
}

impl From<&ServerSettings> for ServerTimeouts {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            read: settings.read_timeout(),
            write: settings.write_timeout(),
            idle: settings.idle_timeout(),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) timeouts: ServerTimeouts,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from loaded settings and a ready pool.
    #[must_use]
    pub fn new(settings: &ServerSettings, db_pool: DbPool) -> Self {
        Self {
            bind_addr: (settings.host().to_owned(), settings.port),
            timeouts: ServerTimeouts::from(settings),
            db_pool,
        }
    }
}
