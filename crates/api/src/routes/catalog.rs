//! Route definitions for the access-gated catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET    /assets              -> list_visible_assets
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/assets", get(catalog::list_visible_assets))
}
