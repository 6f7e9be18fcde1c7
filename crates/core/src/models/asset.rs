//! Asset record and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::plan::AssetCategory;
use crate::types::{DbId, Timestamp};

/// A stored asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub category: AssetCategory,
    pub description: Option<String>,
    pub available: bool,
    pub current_value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new asset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    pub category: AssetCategory,
    pub description: Option<String>,
    /// Defaults to `true` if omitted.
    pub available: Option<bool>,
    #[validate(range(min = 0.0, message = "current_value must not be negative"))]
    pub current_value: f64,
}

/// Body of a price update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssetValue {
    pub new_value: f64,
}

/// Body of an availability toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAssetAvailability {
    pub available: bool,
}

/// Validated input handed to [`crate::store::AssetStore::create`].
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub name: String,
    pub category: AssetCategory,
    pub description: Option<String>,
    pub available: bool,
    pub current_value: f64,
}

impl From<CreateAsset> for NewAsset {
    fn from(input: CreateAsset) -> Self {
        Self {
            name: input.name,
            category: input.category,
            description: input.description,
            available: input.available.unwrap_or(true),
            current_value: input.current_value,
        }
    }
}
