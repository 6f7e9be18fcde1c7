//! Repository for the `assets` table.

use sqlx::PgPool;
use wallet_core::models::asset::NewAsset;
use wallet_core::types::DbId;

use crate::models::asset::AssetRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, category, description, available, current_value, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    ///
    /// Fails with a `uq_assets_name` unique violation if the name is taken.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<AssetRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (name, category, description, available, current_value)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(&input.description)
            .bind(input.available)
            .bind(input.current_value)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM assets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Case-sensitive exact match on `name`.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE name = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all assets in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id ASC");
        sqlx::query_as::<_, AssetRow>(&query).fetch_all(pool).await
    }

    /// List assets with the given availability in insertion order.
    pub async fn list_by_availability(
        pool: &PgPool,
        available: bool,
    ) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE available = $1 ORDER BY id ASC");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(available)
            .fetch_all(pool)
            .await
    }

    /// Set `current_value` only if it still equals `expected`.
    ///
    /// Returns `None` if the row is gone or its value moved since it was read.
    pub async fn compare_and_set_value(
        pool: &PgPool,
        id: DbId,
        expected: f64,
        new_value: f64,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET current_value = $3
             WHERE id = $1 AND current_value = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .bind(expected)
            .bind(new_value)
            .fetch_optional(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_availability(
        pool: &PgPool,
        id: DbId,
        available: bool,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET available = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .bind(available)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
