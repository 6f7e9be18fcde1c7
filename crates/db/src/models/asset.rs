//! Row type for the `assets` table.

use sqlx::FromRow;
use wallet_core::error::StoreError;
use wallet_core::models::asset::Asset;
use wallet_core::types::{DbId, Timestamp};

/// An asset row from the `assets` table.
#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub available: bool,
    pub current_value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<AssetRow> for Asset {
    type Error = StoreError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let category = row.category.parse().map_err(|_| {
            StoreError::Backend(format!(
                "asset {} has unknown category '{}'",
                row.id, row.category
            ))
        })?;

        Ok(Asset {
            id: row.id,
            name: row.name,
            category,
            description: row.description,
            available: row.available,
            current_value: row.current_value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
