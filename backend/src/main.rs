//! Service entry-point: loads settings, prepares storage, seeds example
//! data, and runs the HTTP server until interrupted.

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use users_api::server::{ServerConfig, ServerSettings, create_server, drain};

fn program_name() -> OsString {
    std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("users-api"))
}

async fn prepare_database(database_url: String, pool_size: u32) -> io::Result<DbPool> {
    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|err| io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| io::Error::other(format!("failed to apply migrations: {err}")))?;
    info!(applied, "database migrations applied");

    DbPool::new(PoolConfig::new(database_url).with_max_size(pool_size))
        .await
        .map_err(|err| io::Error::other(format!("failed to build database pool: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    // Seeding is configured through the environment only; the command line
    // belongs to the server settings.
    let seeding = ExampleDataSettings::load_from_iter([program_name()])
        .map_err(|err| io::Error::other(format!("failed to load example data settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    match settings.database_url() {
        Some(url) => {
            let pool = prepare_database(url, settings.database_pool_size()).await?;
            config = config.with_db_pool(pool);
            info!(storage = "postgres", "user storage configured");
        }
        None => info!(storage = "memory", "user storage configured"),
    }

    seed_example_data_on_startup(&seeding, config.repository())
        .await
        .map_err(|err| io::Error::other(err.to_string()))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => drain(&health_state, &handle).await,
            Err(err) => warn!(error = %err, "shutdown signal listener failed"),
        }
    });
    server.await
}
