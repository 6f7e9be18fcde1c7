pub mod asset;
pub mod catalog;
pub mod customer;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                                list, create
/// /assets/available                      list available
/// /assets/unavailable                    list unavailable
/// /assets/{id}                           delete
/// /assets/{id}/value                     variation-guarded price update (PATCH)
/// /assets/{id}/availability              availability toggle (PATCH)
///
/// /customers                             list, create
/// /customers/validate-access             resolve access code (GET)
/// /customers/{id}                        get, edit, delete (code required to mutate)
///
/// /catalog/assets                        plan-filtered available assets (code required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Asset catalogue administration.
        .nest("/assets", asset::router())
        // Customer accounts.
        .nest("/customers", customer::router())
        // Access-gated view of the catalogue.
        .nest("/catalog", catalog::router())
}
