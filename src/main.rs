use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use video_catalog::adapters::http::{api_router, with_middleware};
use video_catalog::adapters::memory::{InMemoryCastMemberRepository, InMemoryCategoryRepository};
use video_catalog::adapters::postgres::{
    PostgresCastMemberRepository, PostgresCategoryRepository, MIGRATOR,
};
use video_catalog::config::{AppConfig, DatabaseConfig, ServerConfig};
use video_catalog::ports::{CastMemberRepository, CategoryRepository};

type Repositories = (Arc<dyn CategoryRepository>, Arc<dyn CastMemberRepository>);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    info!(
        "Starting video catalog v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        config.server.environment
    );

    let (categories, cast_members) = connect(&config.database).await?;
    let app = with_middleware(api_router(categories, cast_members), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<Repositories, Box<dyn Error>> {
    if database.is_memory() {
        info!("Using in-memory repositories");
        return Ok((
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryCastMemberRepository::new()),
        ));
    }

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await?;
    info!(
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        MIGRATOR.run(&pool).await?;
        info!("Migrations applied");
    }

    Ok((
        Arc::new(PostgresCategoryRepository::new(pool.clone())),
        Arc::new(PostgresCastMemberRepository::new(pool)),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
