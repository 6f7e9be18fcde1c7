use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_db::{PgAssetStore, PgCustomerStore};

use wallet_api::config::{ServerConfig, StoreBackend};
use wallet_api::router::build_app_router;
use wallet_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_api=debug,wallet_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        backend = config.store_backend.as_str(),
        "Loaded server configuration"
    );

    let state = connect_state(config.clone()).await;
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shut down cleanly");
}

/// Build handler state for the configured backend.
///
/// PostgreSQL is checked and migrated before the first request is served.
async fn connect_state(config: ServerConfig) -> AppState {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory stores; data is lost on restart");
            AppState::in_memory(config)
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .expect("DATABASE_URL must be set when STORE_BACKEND=postgres");

            let pool = wallet_db::create_pool(&url)
                .await
                .expect("Failed to connect to database");
            wallet_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            wallet_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database ready");

            AppState::new(
                Arc::new(PgAssetStore::new(pool.clone())),
                Arc::new(PgCustomerStore::new(pool)),
                config,
            )
        }
    }
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, draining connections"),
        () = terminate => tracing::info!("SIGTERM received, draining connections"),
    }
}
