//! Backend entry-point: loads settings, prepares the database, and serves
//! the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use learnxcel::inbound::http::health::HealthState;
use learnxcel::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use learnxcel::settings::AppSettings;

use server::{ServerConfig, create_server, drain};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    let database_url = settings.database_url().to_owned();

    if settings.run_migrations() {
        let url = database_url.clone();
        let applied = tokio::task::spawn_blocking(move || run_migrations(&url))
            .await
            .wrap_err("migration task panicked")?
            .wrap_err("failed to apply migrations")?;
        info!(applied, database_url = %database_url, "migrations applied");
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url.as_str()).with_max_size(settings.max_connections()),
    )
    .await
    .wrap_err("failed to build database pool")?;

    let config = ServerConfig::new(settings.bind_addr(), pool);
    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutdown signal received, draining");
                drain(health_state, handle).await;
            }
            Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
        }
    });

    info!(%bind_addr, database_url = %database_url, "serving HTTP");
    server.await.wrap_err("server terminated with an error")
}
