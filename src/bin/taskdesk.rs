//! Runs the Taskdesk HTTP API.
//!
//! Usage:
//!
//! ```text
//! taskdesk [--bind ADDR] [--database-url URL] [--pool-size N]
//!          [--cors-origin ORIGIN] [--log-filter FILTER] [--json-logs]
//! ```
//!
//! With a database URL the `tasks` schema is applied at startup and tasks
//! are stored in `PostgreSQL`. Without one, tasks live in process memory and
//! are lost on exit.

use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use taskdesk::{
    api::build_router,
    config::ServerConfig,
    server::serve,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, apply_schema, build_pool},
        },
        services::TaskService,
    },
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter, config.json_logs)?;

    let cors_origin = config.cors_origin_header()?;
    let pool_size = config.checked_pool_size()?;
    let clock = Arc::new(DefaultClock);

    let router = if let Some(database_url) = config.database_url.as_deref() {
        let pool = build_pool(database_url, pool_size)
            .wrap_err("failed to connect to PostgreSQL")?;
        apply_schema(&pool)
            .await
            .wrap_err("failed to apply the tasks schema")?;
        info!(pool_size, "using PostgreSQL task storage");
        let repository = Arc::new(PostgresTaskRepository::new(pool));
        build_router(TaskService::new(repository, clock), cors_origin)
    } else {
        warn!("DATABASE_URL not set; tasks are kept in memory and lost on exit");
        let repository = Arc::new(InMemoryTaskRepository::new());
        build_router(TaskService::new(repository, clock), cors_origin)
    };

    let listener = TcpListener::bind(&config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    serve(listener, router).await?;
    Ok(())
}
