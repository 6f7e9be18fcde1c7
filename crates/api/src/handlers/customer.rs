//! Handlers for the `/customers` resource.
//!
//! Mutating routes take the customer's current access code via
//! [`PresentedCode`]. No handler here ever returns the code itself.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wallet_core::error::CoreError;
use wallet_core::models::customer::{CreateCustomer, CustomerView, UpdateCustomer};
use wallet_core::rules::CustomerRules;
use wallet_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::access_code::PresentedCode;
use crate::state::AppState;

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<CustomerView>)> {
    let customer = CustomerRules::create(state.customers.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v1/customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CustomerView>>> {
    let customers = CustomerRules::list_all(state.customers.as_ref()).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomerView>> {
    let customer = CustomerRules::get(state.customers.as_ref(), id).await?;
    Ok(Json(customer))
}

/// PUT /api/v1/customers/{id}?access_code=
///
/// The body is taken raw and decoded only after the id and code have been
/// checked, so a caller without the code learns nothing from body errors.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    PresentedCode(code): PresentedCode,
    body: Bytes,
) -> AppResult<Json<CustomerView>> {
    let customer = CustomerRules::edit_with(state.customers.as_ref(), id, code.as_deref(), || {
        decode_update(&body)
    })
    .await?;
    Ok(Json(customer))
}

fn decode_update(body: &[u8]) -> Result<UpdateCustomer, CoreError> {
    serde_json::from_slice(body)
        .map_err(|e| CoreError::BadRequest(format!("Invalid request body: {e}")))
}

/// DELETE /api/v1/customers/{id}?access_code=
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    PresentedCode(code): PresentedCode,
) -> AppResult<StatusCode> {
    CustomerRules::remove(state.customers.as_ref(), id, code.as_deref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/customers/validate-access?access_code=
///
/// Returns the owning customer as a one-element list.
pub async fn validate_access(
    State(state): State<AppState>,
    PresentedCode(code): PresentedCode,
) -> AppResult<Json<Vec<CustomerView>>> {
    let customer =
        CustomerRules::resolve_by_access_code(state.customers.as_ref(), code.as_deref()).await?;
    Ok(Json(vec![customer]))
}
