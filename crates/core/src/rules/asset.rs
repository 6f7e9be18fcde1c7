//! Asset rules: name uniqueness, the variation guard, availability toggling.

use crate::error::{CoreError, StoreError};
use crate::models::asset::{Asset, CreateAsset, NewAsset};
use crate::rules::validate_input;
use crate::store::{AssetStore, ASSET_NAME_CONSTRAINT};
use crate::types::DbId;
use crate::variation::{check_variation, validate_value};

const ENTITY: &str = "Asset";

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

/// Rule component for assets.
pub struct AssetRules;

impl AssetRules {
    /// Create an asset, rejecting a name that is already taken.
    pub async fn create(store: &dyn AssetStore, input: CreateAsset) -> Result<Asset, CoreError> {
        validate_input(&input)?;
        validate_value(input.current_value)?;

        if store.find_by_name(&input.name).await?.is_some() {
            return Err(CoreError::DuplicateName(input.name));
        }

        let name = input.name.clone();
        let asset = store.create(NewAsset::from(input)).await.map_err(|err| match err {
            // Lost a race with a concurrent create of the same name.
            StoreError::UniqueViolation { ref constraint } if constraint == ASSET_NAME_CONSTRAINT => {
                CoreError::DuplicateName(name)
            }
            other => other.into(),
        })?;

        tracing::info!(asset_id = asset.id, name = %asset.name, category = %asset.category, "Asset created");
        Ok(asset)
    }

    /// Replace an asset's value if it moves by at least 1%.
    pub async fn update_value(
        store: &dyn AssetStore,
        id: DbId,
        new_value: f64,
    ) -> Result<Asset, CoreError> {
        let asset = store.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        check_variation(asset.current_value, new_value).inspect_err(|_| {
            tracing::debug!(
                asset_id = id,
                current = asset.current_value,
                requested = new_value,
                "Price update rejected by variation guard"
            );
        })?;

        match store
            .compare_and_set_value(id, asset.current_value, new_value)
            .await?
        {
            Some(updated) => {
                tracing::info!(
                    asset_id = id,
                    previous = asset.current_value,
                    current = updated.current_value,
                    "Asset value updated"
                );
                Ok(updated)
            }
            None if !store.exists_by_id(id).await? => Err(not_found(id)),
            None => {
                tracing::warn!(asset_id = id, "Asset value changed concurrently");
                Err(CoreError::Conflict(format!(
                    "Asset {id} was modified concurrently; retry with the current value"
                )))
            }
        }
    }

    pub async fn set_availability(
        store: &dyn AssetStore,
        id: DbId,
        available: bool,
    ) -> Result<Asset, CoreError> {
        let asset = store
            .set_availability(id, available)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(asset_id = id, available, "Asset availability changed");
        Ok(asset)
    }

    pub async fn remove(store: &dyn AssetStore, id: DbId) -> Result<(), CoreError> {
        if !store.delete_by_id(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(asset_id = id, "Asset removed");
        Ok(())
    }

    pub async fn list_all(store: &dyn AssetStore) -> Result<Vec<Asset>, CoreError> {
        Ok(store.list_all().await?)
    }

    pub async fn list_available(store: &dyn AssetStore) -> Result<Vec<Asset>, CoreError> {
        Ok(store.find_by_availability(true).await?)
    }

    pub async fn list_unavailable(store: &dyn AssetStore) -> Result<Vec<Asset>, CoreError> {
        Ok(store.find_by_availability(false).await?)
    }
}
