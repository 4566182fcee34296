//! Service entry-point: configuration, migrations, pool, and HTTP server.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts::config::AppConfig;
use accounts::inbound::http::health::HealthState;
use accounts::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load_from_iter(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if config.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_pending_migrations(&config.database_url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool = DbPool::new(
        PoolConfig::new(config.database_url.as_str()).with_max_size(config.db_max_connections),
    )
    .await
    .map_err(std::io::Error::other)?;

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(bind_addr, pool).with_hash_memory_kib(config.hash_memory_kib),
    )?;
    info!(%bind_addr, "accounts service listening");
    server.await
}
