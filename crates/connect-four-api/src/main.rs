//! Connect Four bot server entry point.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use connect_four_api::config::ApiConfig;
use connect_four_api::delivery::LoggingMessageSender;
use connect_four_api::error::AppError;
use connect_four_api::state::AppState;
use connect_four_api::{app, telemetry};
use connect_four_core::repository::SnapshotStore;
use connect_four_core::rng::{DeterministicRng, ThreadRng};
use connect_four_game::application::controller::SessionController;
use connect_four_store::memory::MemorySnapshotStore;
use connect_four_store::pg_snapshot_store::PgSnapshotStore;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ApiConfig::from_env()?;
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!(
        context = %config.context,
        strategy = ?config.strategy,
        "Starting Connect Four bot server"
    );

    let result = serve(config).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "server stopped");
    }
    telemetry.shutdown();
    result
}

async fn serve(config: ApiConfig) -> Result<(), AppError> {
    let store: Arc<dyn SnapshotStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            let store = PgSnapshotStore::new(pool);
            store.ensure_schema().await?;
            tracing::info!("using PostgreSQL snapshot store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, sessions are kept in memory");
            Arc::new(MemorySnapshotStore::new())
        }
    };

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(ThreadRng));
    let controller = SessionController::new(
        store,
        Arc::new(LoggingMessageSender),
        rng,
        config.strategy.build(),
    );
    let router = app(AppState::new(Arc::new(controller), config.context.as_str()));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
