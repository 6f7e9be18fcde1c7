//! Route definitions for the `/assets` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::asset;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /available           -> list_available
/// GET    /unavailable         -> list_unavailable
/// DELETE /{id}                -> delete
/// PATCH  /{id}/value          -> update_value
/// PATCH  /{id}/availability   -> set_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(asset::list).post(asset::create))
        .route("/available", get(asset::list_available))
        .route("/unavailable", get(asset::list_unavailable))
        .route("/{id}", delete(asset::delete))
        .route("/{id}/value", patch(asset::update_value))
        .route("/{id}/availability", patch(asset::set_availability))
}
