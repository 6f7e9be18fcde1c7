//! Handlers for the `/assets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wallet_core::models::asset::{Asset, CreateAsset, SetAssetAvailability, UpdateAssetValue};
use wallet_core::rules::AssetRules;
use wallet_core::types::DbId;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/assets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let asset = AssetRules::create(state.assets.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRules::list_all(state.assets.as_ref()).await?;
    Ok(Json(assets))
}

/// GET /api/v1/assets/available
pub async fn list_available(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRules::list_available(state.assets.as_ref()).await?;
    Ok(Json(assets))
}

/// GET /api/v1/assets/unavailable
pub async fn list_unavailable(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRules::list_unavailable(state.assets.as_ref()).await?;
    Ok(Json(assets))
}

/// PATCH /api/v1/assets/{id}/value
///
/// Rejected with 400 unless the new value differs from the current one by
/// at least 1%.
pub async fn update_value(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssetValue>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRules::update_value(state.assets.as_ref(), id, input.new_value).await?;
    Ok(Json(asset))
}

/// PATCH /api/v1/assets/{id}/availability
pub async fn set_availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetAssetAvailability>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRules::set_availability(state.assets.as_ref(), id, input.available).await?;
    Ok(Json(asset))
}

/// DELETE /api/v1/assets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    AssetRules::remove(state.assets.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
