//! Business-rule components.
//!
//! Each component is a zero-sized struct whose associated functions take the
//! store(s) they need as their first arguments, mirroring the repository
//! layer one level down.

pub mod asset;
pub mod catalog;
pub mod customer;

pub use asset::AssetRules;
pub use catalog::Catalog;
pub use customer::CustomerRules;

use validator::Validate;

use crate::error::CoreError;

/// Run derive-based DTO validation, mapping failures to [`CoreError::BadRequest`].
fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::BadRequest(errors.to_string()))
}
