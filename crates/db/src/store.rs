//! PostgreSQL implementations of the core store traits.
//!
//! Thin wrappers over [`AssetRepo`] / [`CustomerRepo`]: convert rows into
//! core records and sqlx errors into [`StoreError`].

use async_trait::async_trait;
use wallet_core::access_code::AccessCode;
use wallet_core::error::StoreError;
use wallet_core::models::asset::{Asset, NewAsset};
use wallet_core::models::customer::{Customer, CustomerChanges, NewCustomer};
use wallet_core::store::{AssetStore, CustomerStore, StoreResult};
use wallet_core::types::DbId;

use crate::repositories::{AssetRepo, CustomerRepo};
use crate::DbPool;

/// Classify a sqlx error for the rule layer.
///
/// PostgreSQL unique violations (SQLSTATE `23505`) keep their constraint
/// name; everything else is logged and reported as a backend failure.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            };
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}

fn convert_all<R, T>(rows: Vec<R>) -> StoreResult<Vec<T>>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}

fn convert_opt<R, T>(row: Option<R>) -> StoreResult<Option<T>>
where
    T: TryFrom<R, Error = StoreError>,
{
    row.map(T::try_from).transpose()
}

/// [`AssetStore`] backed by the `assets` table.
#[derive(Clone)]
pub struct PgAssetStore {
    pool: DbPool,
}

impl PgAssetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn create(&self, input: NewAsset) -> StoreResult<Asset> {
        let row = AssetRepo::create(&self.pool, &input)
            .await
            .map_err(map_sqlx_error)?;
        Asset::try_from(row)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Asset>> {
        let row = AssetRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        AssetRepo::exists(&self.pool, id).await.map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        AssetRepo::delete(&self.pool, id).await.map_err(map_sqlx_error)
    }

    async fn list_all(&self) -> StoreResult<Vec<Asset>> {
        let rows = AssetRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        convert_all(rows)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Asset>> {
        let row = AssetRepo::find_by_name(&self.pool, name)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn find_by_availability(&self, available: bool) -> StoreResult<Vec<Asset>> {
        let rows = AssetRepo::list_by_availability(&self.pool, available)
            .await
            .map_err(map_sqlx_error)?;
        convert_all(rows)
    }

    async fn compare_and_set_value(
        &self,
        id: DbId,
        expected: f64,
        new_value: f64,
    ) -> StoreResult<Option<Asset>> {
        let row = AssetRepo::compare_and_set_value(&self.pool, id, expected, new_value)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn set_availability(&self, id: DbId, available: bool) -> StoreResult<Option<Asset>> {
        let row = AssetRepo::set_availability(&self.pool, id, available)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await.map_err(map_sqlx_error)
    }
}

/// [`CustomerStore`] backed by the `customers` table.
#[derive(Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn create(&self, input: NewCustomer) -> StoreResult<Customer> {
        let row = CustomerRepo::create(&self.pool, &input)
            .await
            .map_err(map_sqlx_error)?;
        Customer::try_from(row)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Customer>> {
        let row = CustomerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        CustomerRepo::exists(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        CustomerRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        let rows = CustomerRepo::list(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        convert_all(rows)
    }

    async fn find_by_access_code(&self, code: &str) -> StoreResult<Vec<Customer>> {
        let rows = CustomerRepo::find_by_access_code(&self.pool, code)
            .await
            .map_err(map_sqlx_error)?;
        convert_all(rows)
    }

    async fn update_if_code(
        &self,
        id: DbId,
        expected_code: &AccessCode,
        changes: CustomerChanges,
    ) -> StoreResult<Option<Customer>> {
        let row = CustomerRepo::update_if_code(&self.pool, id, expected_code.expose(), &changes)
            .await
            .map_err(map_sqlx_error)?;
        convert_opt(row)
    }

    async fn delete_if_code(&self, id: DbId, expected_code: &AccessCode) -> StoreResult<bool> {
        CustomerRepo::delete_if_code(&self.pool, id, expected_code.expose())
            .await
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await.map_err(map_sqlx_error)
    }
}
