//! Handler for the access-gated asset catalog.

use axum::extract::State;
use axum::Json;
use wallet_core::models::asset::Asset;
use wallet_core::rules::Catalog;

use crate::error::AppResult;
use crate::middleware::access_code::PresentedCode;
use crate::state::AppState;

/// GET /api/v1/catalog/assets?access_code=
///
/// Available assets filtered by the plan of the customer owning the code.
pub async fn list_visible_assets(
    State(state): State<AppState>,
    PresentedCode(code): PresentedCode,
) -> AppResult<Json<Vec<Asset>>> {
    let assets = Catalog::list_visible_assets(
        state.customers.as_ref(),
        state.assets.as_ref(),
        code.as_deref(),
    )
    .await?;
    Ok(Json(assets))
}
