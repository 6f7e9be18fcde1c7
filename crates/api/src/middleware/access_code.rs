//! Extractor for the access code a caller presents on customer-scoped calls.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::AppError;

/// Header accepted as an alternative to the `access_code` query parameter.
pub const ACCESS_CODE_HEADER: &str = "x-access-code";

#[derive(Debug, Deserialize)]
struct AccessCodeParams {
    access_code: Option<String>,
}

/// The access code presented with a request, if any.
///
/// Read from the `access_code` query parameter, falling back to the
/// `x-access-code` header. Absence is not rejected here: the customer rules
/// decide what a missing code means for each operation.
///
/// ```ignore
/// async fn my_handler(PresentedCode(code): PresentedCode) -> AppResult<Json<()>> {
///     CustomerRules::remove(state.customers.as_ref(), id, code.as_deref()).await?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Clone, Default)]
pub struct PresentedCode(pub Option<String>);

impl<S> FromRequestParts<S> for PresentedCode
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<AccessCodeParams>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))?;

        let code = params.access_code.or_else(|| {
            parts
                .headers
                .get(ACCESS_CODE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        });

        Ok(PresentedCode(code))
    }
}

impl std::fmt::Debug for PresentedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self.0.as_ref().map(|_| "******");
        f.debug_tuple("PresentedCode").field(&shown).finish()
    }
}
