//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when both stores answer, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Configured store backend (`postgres` or `memory`).
    pub backend: &'static str,
    pub store_healthy: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (assets, customers) = tokio::join!(state.assets.ping(), state.customers.ping());

    if let Err(e) = &assets {
        tracing::warn!(error = %e, "Asset store ping failed");
    }
    if let Err(e) = &customers {
        tracing::warn!(error = %e, "Customer store ping failed");
    }

    let store_healthy = assets.is_ok() && customers.is_ok();
    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        backend: state.config.store_backend.as_str(),
        store_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
