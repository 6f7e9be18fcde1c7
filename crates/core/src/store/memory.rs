//! In-memory store adapters.
//!
//! Rows live in an id-ordered `BTreeMap` behind a `tokio::sync::RwLock`, so
//! iteration order is insertion order and every conditional write runs
//! inside a single write-lock scope.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::access_code::AccessCode;
use crate::error::StoreError;
use crate::models::asset::{Asset, NewAsset};
use crate::models::customer::{Customer, CustomerChanges, NewCustomer};
use crate::store::{AssetStore, CustomerStore, StoreResult, ASSET_NAME_CONSTRAINT};
use crate::types::DbId;

struct Table<T> {
    next_id: DbId,
    rows: BTreeMap<DbId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Asset store held entirely in process memory.
#[derive(Default)]
pub struct MemoryAssetStore {
    table: RwLock<Table<Asset>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn create(&self, input: NewAsset) -> StoreResult<Asset> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|a| a.name == input.name) {
            return Err(StoreError::UniqueViolation {
                constraint: ASSET_NAME_CONSTRAINT.to_string(),
            });
        }

        let now = Utc::now();
        let asset = Asset {
            id: table.allocate_id(),
            name: input.name,
            category: input.category,
            description: input.description,
            available: input.available,
            current_value: input.current_value,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Asset>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn list_all(&self) -> StoreResult<Vec<Asset>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Asset>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|a| a.name == name)
            .cloned())
    }

    async fn find_by_availability(&self, available: bool) -> StoreResult<Vec<Asset>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|a| a.available == available)
            .cloned()
            .collect())
    }

    async fn compare_and_set_value(
        &self,
        id: DbId,
        expected: f64,
        new_value: f64,
    ) -> StoreResult<Option<Asset>> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(asset) if asset.current_value == expected => {
                asset.current_value = new_value;
                asset.updated_at = Utc::now();
                Ok(Some(asset.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn set_availability(&self, id: DbId, available: bool) -> StoreResult<Option<Asset>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|asset| {
            asset.available = available;
            asset.updated_at = Utc::now();
            asset.clone()
        }))
    }
}

/// Customer store held entirely in process memory.
#[derive(Default)]
pub struct MemoryCustomerStore {
    table: RwLock<Table<Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn create(&self, input: NewCustomer) -> StoreResult<Customer> {
        let mut table = self.table.write().await;
        let now = Utc::now();
        let customer = Customer {
            id: table.allocate_id(),
            full_name: input.full_name,
            primary_address: input.primary_address,
            plan: input.plan,
            access_code: input.access_code,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get_by_id(&self, id: DbId) -> StoreResult<Option<Customer>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_access_code(&self, code: &str) -> StoreResult<Vec<Customer>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|c| c.access_code.verify(code))
            .cloned()
            .collect())
    }

    async fn update_if_code(
        &self,
        id: DbId,
        expected_code: &AccessCode,
        changes: CustomerChanges,
    ) -> StoreResult<Option<Customer>> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(customer) if customer.access_code == *expected_code => {
                customer.full_name = changes.full_name;
                customer.primary_address = changes.primary_address;
                customer.plan = changes.plan;
                if let Some(code) = changes.access_code {
                    customer.access_code = code;
                }
                customer.updated_at = Utc::now();
                Ok(Some(customer.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_if_code(&self, id: DbId, expected_code: &AccessCode) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let matches = table
            .rows
            .get(&id)
            .is_some_and(|c| c.access_code == *expected_code);
        if matches {
            table.rows.remove(&id);
        }
        Ok(matches)
    }
}
