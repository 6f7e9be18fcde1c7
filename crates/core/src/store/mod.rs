//! Store capabilities consumed by the rule components.
//!
//! The rules never touch a database directly. They call these traits, which
//! are implemented by the PostgreSQL adapters in `wallet-db` and by the
//! in-memory adapters in [`memory`].
//!
//! Read-modify-write sequences in the rules are only safe because the
//! `*_if_*` / `compare_and_set_*` methods apply their write atomically for a
//! single identity: the guard is re-checked at write time and the method
//! reports a miss instead of overwriting a concurrent change.

pub mod memory;

use async_trait::async_trait;

use crate::access_code::AccessCode;
use crate::error::StoreError;
use crate::models::asset::{Asset, NewAsset};
use crate::models::customer::{Customer, CustomerChanges, NewCustomer};
use crate::types::DbId;

pub type StoreResult<T> = Result<T, StoreError>;

/// Unique constraint guarding asset names.
pub const ASSET_NAME_CONSTRAINT: &str = "uq_assets_name";

/// Persistence for assets. Listings are in insertion order.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Insert a new asset. Fails with [`StoreError::UniqueViolation`] naming
    /// [`ASSET_NAME_CONSTRAINT`] if the name is taken.
    async fn create(&self, input: NewAsset) -> StoreResult<Asset>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Asset>>;

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool>;

    async fn list_all(&self) -> StoreResult<Vec<Asset>>;

    /// Exact, case-sensitive name lookup.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Asset>>;

    async fn find_by_availability(&self, available: bool) -> StoreResult<Vec<Asset>>;

    /// Replace `current_value` only if it still equals `expected`.
    ///
    /// Returns `None` if the asset is gone or its value changed since it was read.
    async fn compare_and_set_value(
        &self,
        id: DbId,
        expected: f64,
        new_value: f64,
    ) -> StoreResult<Option<Asset>>;

    /// Returns `None` if no asset has that id.
    async fn set_availability(&self, id: DbId, available: bool) -> StoreResult<Option<Asset>>;

    /// Cheap liveness check.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Persistence for customers. Listings are in insertion order.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn create(&self, input: NewCustomer) -> StoreResult<Customer>;

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Customer>>;

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool>;

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool>;

    async fn list_all(&self) -> StoreResult<Vec<Customer>>;

    /// Customers holding this code, in id order.
    ///
    /// Codes are not unique. Callers only distinguish zero, one, or several
    /// holders, so an implementation may stop after the second match.
    async fn find_by_access_code(&self, code: &str) -> StoreResult<Vec<Customer>>;

    /// Apply `changes` only if the stored code still equals `expected_code`.
    ///
    /// Returns `None` if the customer is gone or the code no longer matches.
    async fn update_if_code(
        &self,
        id: DbId,
        expected_code: &AccessCode,
        changes: CustomerChanges,
    ) -> StoreResult<Option<Customer>>;

    /// Delete only if the stored code still equals `expected_code`.
    async fn delete_if_code(&self, id: DbId, expected_code: &AccessCode) -> StoreResult<bool>;

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
