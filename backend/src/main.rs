//! Backend entry-point: loads settings, connects to PostgreSQL and serves the
//! habits REST API with health probes and OpenAPI docs.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use habits_backend::inbound::http::health::HealthState;
use habits_backend::outbound::persistence::{DbPool, PoolConfig};
use habits_backend::settings::Settings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = Settings::load("habits-backend")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = settings.database.database_url()?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.database.pool_max_size),
    )
    .await
    .wrap_err("failed to create database pool")?;
    // A live connection is required before the listener binds.
    drop(pool.get().await.wrap_err("failed to reach the database")?);
    info!(
        max_size = settings.database.pool_max_size,
        "database pool ready"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(&settings.server, pool),
    )
    .wrap_err("failed to start HTTP server")?;
    info!(
        host = settings.server.host(),
        port = settings.server.port,
        "listening"
    );

    server.await?;
    health_state.mark_unhealthy();
    Ok(())
}
