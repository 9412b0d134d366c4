use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf_db::store::{MemoryBookStore, PgBookStore, SharedBookStore};
use bookshelf_db::StoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookshelf_api::config::{ConfigError, ServerConfig, StoreBackend};
use bookshelf_api::router::build_app_router;
use bookshelf_api::state::AppState;

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open book store: {0}")]
    Store(#[from] StoreError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

/// Install the global subscriber. `LOG_FORMAT=json` selects JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bookshelf_api=debug,bookshelf_db=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run() -> Result<(), StartupError> {
    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        backend = ?config.store_backend,
        "Loaded server configuration",
    );

    // --- Store ---
    let store = open_store(&config).await?;

    // --- Router ---
    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Server is running");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing store");
    store.close().await;

    served?;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Open the configured store. There is no retry: a failure here ends startup.
async fn open_store(config: &ServerConfig) -> Result<SharedBookStore, StoreError> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory book store; data is lost on restart");
            Ok(Arc::new(MemoryBookStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = bookshelf_db::create_pool(&config.database_url, config.db_max_connections)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to database"))?;
            tracing::info!("Connected to database");

            bookshelf_db::health_check(&pool).await?;
            tracing::info!("Database health check passed");

            bookshelf_db::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgBookStore::new(pool)))
        }
    }
}

/// Wait for SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
